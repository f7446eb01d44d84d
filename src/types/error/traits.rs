use super::Error;
use core::fmt::Display;

impl Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if !f.alternate() {
            return Display::fmt(&self.fmt(), f);
        }
        f.write_str(&self.error_chain())
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.inner().map(|inner| inner as &(dyn std::error::Error + 'static))
    }
}

impl From<&str> for Error {
    #[inline]
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for Error {
    #[inline]
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

impl From<std::io::Error> for Error {
    #[inline]
    fn from(error: std::io::Error) -> Self {
        Self::from_std_error(&error)
    }
}
