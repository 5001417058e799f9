//! Display configuration types and builder

pub use crate::error::{BuilderError, MAX_COLUMNS, MAX_PAGES};
use crate::protocol::{PAGE_BYTES, PAGES};

/// Panel geometry and addressing
///
/// Use `Builder` to create a Config. Fields are only readable, so every
/// `Config` has passed [`Builder::build`] or is the default.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Config {
    /// First panel column of the frame (low column nibble)
    column_offset: u8,
    /// Panel columns cleared per page when blanking
    columns: u8,
    /// Panel pages cleared when blanking
    pages: u8,
}

impl Config {
    /// First panel column of the frame, `0..=0x0F`
    pub fn column_offset(&self) -> u8 {
        self.column_offset
    }

    /// Panel columns cleared per page, at most [`MAX_COLUMNS`]
    pub fn columns(&self) -> u8 {
        self.columns
    }

    /// Panel pages cleared, `8..=MAX_PAGES`
    pub fn pages(&self) -> u8 {
        self.pages
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            column_offset: 8,
            columns: 96,
            pages: 9,
        }
    }
}

/// Builder for constructing display configuration
///
/// # Example
///
/// ```rust,no_run
/// use pewpew_lcd::Builder;
///
/// let config = match Builder::new().column_offset(8).columns(96).pages(9).build() {
///     Ok(config) => config,
///     Err(_) => return,
/// };
/// let _ = config;
/// ```
#[must_use]
#[derive(Default)]
pub struct Builder {
    config: Config,
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the column where each frame page starts
    pub fn column_offset(mut self, value: u8) -> Self {
        self.config.column_offset = value;
        self
    }

    /// Set the number of panel columns
    pub fn columns(mut self, value: u8) -> Self {
        self.config.columns = value;
        self
    }

    /// Set the number of panel pages
    pub fn pages(mut self, value: u8) -> Self {
        self.config.pages = value;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// - `BuilderError::InvalidColumnOffset` if the offset is above `0x0F`
    /// - `BuilderError::InvalidColumns` if a frame page does not fit between
    ///   the offset and the last column, or columns exceed [`MAX_COLUMNS`]
    /// - `BuilderError::InvalidPages` if pages are fewer than a frame or
    ///   exceed [`MAX_PAGES`]
    pub fn build(self) -> Result<Config, BuilderError> {
        let Config {
            column_offset,
            columns,
            pages,
        } = self.config;

        if column_offset > 0x0F {
            return Err(BuilderError::InvalidColumnOffset { column_offset });
        }
        let frame_end = usize::from(column_offset) + PAGE_BYTES;
        if frame_end > usize::from(columns) || columns > MAX_COLUMNS {
            return Err(BuilderError::InvalidColumns {
                columns,
                column_offset,
            });
        }
        if usize::from(pages) < PAGES || pages > MAX_PAGES {
            return Err(BuilderError::InvalidPages { pages });
        }

        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_builds() {
        let config = Builder::new().build().unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.column_offset(), 8);
        assert_eq!(config.columns(), 96);
        assert_eq!(config.pages(), 9);
    }

    #[test]
    fn test_column_offset_too_large() {
        let result = Builder::new().column_offset(16).columns(128).build();
        assert_eq!(
            result,
            Err(BuilderError::InvalidColumnOffset { column_offset: 16 })
        );
    }

    #[test]
    fn test_frame_must_fit_columns() {
        assert!(Builder::new().column_offset(0).columns(80).build().is_ok());
        assert!(matches!(
            Builder::new().column_offset(1).columns(80).build(),
            Err(BuilderError::InvalidColumns { .. })
        ));
        assert!(matches!(
            Builder::new().columns(129).build(),
            Err(BuilderError::InvalidColumns { .. })
        ));
    }

    #[test]
    fn test_pages_range() {
        assert!(Builder::new().pages(8).build().is_ok());
        assert!(Builder::new().pages(16).build().is_ok());
        assert_eq!(
            Builder::new().pages(7).build(),
            Err(BuilderError::InvalidPages { pages: 7 })
        );
        assert_eq!(
            Builder::new().pages(17).build(),
            Err(BuilderError::InvalidPages { pages: 17 })
        );
    }
}
