//! Core display operations

use log::{debug, trace};

use crate::command::{SET_COLUMN_HIGH, SET_COLUMN_LOW};
use crate::config::{Config, MAX_COLUMNS};
use crate::error::Error;
use crate::interface::DisplayInterface;
use crate::pix::Pix;
use crate::protocol::{PAGE_BYTES, PAGES, encode_page, page_address};

type DisplayResult<I> = core::result::Result<(), Error<I>>;

/// Display driver for the dithered 8x8 screen
///
/// Owns the transport and writes whole frames; there is no partial update.
pub struct Display<I>
where
    I: DisplayInterface,
{
    /// Hardware interface
    interface: I,
    /// Display configuration
    config: Config,
}

impl<I> Display<I>
where
    I: DisplayInterface,
{
    /// Create a new Display instance
    pub fn new(interface: I, config: Config) -> Self {
        Self { interface, config }
    }

    /// Clear every page of the panel RAM to zero
    ///
    /// Writes `config.pages` pages of `config.columns` zero bytes, starting
    /// at column 0. The margins outside the frame are only ever cleared here.
    pub fn blank(&mut self) -> DisplayResult<I> {
        debug!(
            "blanking {} pages x {} columns",
            self.config.pages(),
            self.config.columns()
        );
        let zeros = [0u8; MAX_COLUMNS as usize];
        let columns = usize::from(self.config.columns()).min(zeros.len());
        let row = &zeros[..columns];

        for page in 0..self.config.pages() {
            self.send(SET_COLUMN_LOW, &[])?;
            self.send(SET_COLUMN_HIGH, &[])?;
            self.send(page_address(page), row)?;
        }
        Ok(())
    }

    /// Dither `pix` and write it to the panel
    ///
    /// Sends 8 page writes of 80 bytes, each preceded by the two column
    /// address commands. Only the top-left 8x8 of `pix` is shown; a smaller
    /// buffer shows level 0 past its edges.
    pub fn show<B>(&mut self, pix: &Pix<B>) -> DisplayResult<I>
    where
        B: AsRef<[u8]>,
    {
        trace!("show {}x{}", pix.width(), pix.height());
        let mut page_buffer = [0u8; PAGE_BYTES];

        for page in 0..PAGES {
            self.send(SET_COLUMN_LOW | self.config.column_offset(), &[])?;
            self.send(SET_COLUMN_HIGH, &[])?;
            encode_page(pix, page, &mut page_buffer);
            self.send(page_address(page as u8), &page_buffer)?;
        }
        Ok(())
    }

    /// Send a command and payload to the display controller
    fn send(&mut self, command: u8, payload: &[u8]) -> DisplayResult<I> {
        self.interface
            .send(command, payload)
            .map_err(Error::Interface)
    }

    /// Access the underlying configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Release the hardware interface
    pub fn release(self) -> I {
        self.interface
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Builder, MAX_PAGES};
    use crate::protocol::{PATTERN_LEN, PATTERNS};
    use alloc::vec::Vec;

    #[derive(Debug, Default)]
    struct MockInterface {
        sent: Vec<(u8, Vec<u8>)>,
        fail_after: Option<usize>,
    }

    impl DisplayInterface for MockInterface {
        type Error = ();

        fn send(&mut self, command: u8, payload: &[u8]) -> Result<(), Self::Error> {
            if self.fail_after == Some(self.sent.len()) {
                return Err(());
            }
            self.sent.push((command, payload.to_vec()));
            Ok(())
        }
    }

    fn test_display() -> Display<MockInterface> {
        Display::new(MockInterface::default(), Builder::new().build().unwrap())
    }

    fn screen(level: u8) -> Pix<[u8; 64]> {
        Pix::new(8, 8, [level; 64]).unwrap()
    }

    #[test]
    fn test_blank_writes_nine_zero_pages() {
        let mut display = test_display();
        display.blank().unwrap();

        let sent = display.release().sent;
        assert_eq!(sent.len(), 27);
        for (page, chunk) in sent.chunks(3).enumerate() {
            assert_eq!(chunk[0], (0x00, Vec::new()));
            assert_eq!(chunk[1], (0x10, Vec::new()));
            assert_eq!(chunk[2].0, 0xB0 | page as u8);
            assert_eq!(chunk[2].1.len(), 96);
            assert!(chunk[2].1.iter().all(|&b| b == 0));
        }
    }

    #[test]
    fn test_blank_uses_configured_geometry() {
        let config = Builder::new().columns(128).pages(16).build().unwrap();
        let mut display = Display::new(MockInterface::default(), config);
        display.blank().unwrap();

        let sent = display.release().sent;
        assert_eq!(sent.len(), 48);
        assert_eq!(sent[47].0, 0xBF);
        assert_eq!(sent[47].1.len(), 128);
    }

    #[test]
    fn test_show_frame_shape() {
        let mut display = test_display();
        display.show(&screen(0)).unwrap();

        let sent = display.release().sent;
        assert_eq!(sent.len(), 24);

        let addressing: Vec<_> = sent.iter().filter(|(_, p)| p.is_empty()).collect();
        assert_eq!(addressing.len(), 16);

        let pages: Vec<_> = sent.iter().filter(|(_, p)| !p.is_empty()).collect();
        assert_eq!(pages.len(), 8);
        let total: usize = pages.iter().map(|(_, p)| p.len()).sum();
        assert_eq!(total, 640);

        for (page, chunk) in sent.chunks(3).enumerate() {
            assert_eq!(chunk[0], (0x08, Vec::new()));
            assert_eq!(chunk[1], (0x10, Vec::new()));
            assert_eq!(chunk[2].0, 0xB0 | page as u8);
            assert_eq!(chunk[2].1.len(), 80);
        }
    }

    #[test]
    fn test_show_blank_and_solid() {
        for level in [0u8, 3] {
            let mut display = test_display();
            display.show(&screen(level)).unwrap();

            for (_, payload) in display.release().sent.iter().filter(|(_, p)| !p.is_empty()) {
                for block in payload.chunks_exact(PATTERN_LEN) {
                    assert_eq!(block, &PATTERNS[usize::from(level)]);
                }
            }
        }
    }

    #[test]
    fn test_show_checkerboard_mirrors_both_axes() {
        let mut pix = screen(0);
        for y in 0..8 {
            for x in 0..8 {
                pix.set_pixel(x, y, ((x + 2 * y) % 4) as u8);
            }
        }
        let mut display = test_display();
        display.show(&pix).unwrap();

        let sent = display.release().sent;
        for (page, chunk) in sent.chunks(3).enumerate() {
            let payload = &chunk[2].1;
            for (k, block) in payload.chunks_exact(PATTERN_LEN).enumerate() {
                let level = pix.pixel(7 - k as i32, 7 - page as i32);
                assert_eq!(block, &PATTERNS[usize::from(level)]);
            }
        }
    }

    #[test]
    fn test_show_respects_column_offset() {
        let config = Builder::new().column_offset(0).build().unwrap();
        let mut display = Display::new(MockInterface::default(), config);
        display.show(&screen(1)).unwrap();
        assert_eq!(display.release().sent[0], (0x00, Vec::new()));
    }

    #[test]
    fn test_every_built_geometry_sends_valid_opcodes() {
        for column_offset in 0..=0x0F {
            for pages in 8..=MAX_PAGES {
                let config = Builder::new()
                    .column_offset(column_offset)
                    .columns(MAX_COLUMNS)
                    .pages(pages)
                    .build()
                    .unwrap();
                let mut display = Display::new(MockInterface::default(), config);
                display.blank().unwrap();
                display.show(&screen(1)).unwrap();

                let sent = display.release().sent;
                assert_eq!(sent.len(), 3 * usize::from(pages) + 24);
                for (command, payload) in &sent {
                    if payload.is_empty() {
                        assert!(*command <= 0x0F || *command == SET_COLUMN_HIGH);
                    } else {
                        assert_eq!(command & 0xF0, 0xB0);
                        assert!(payload.len() <= usize::from(MAX_COLUMNS));
                    }
                }
                assert_eq!(sent[3 * usize::from(pages)].0, column_offset);
            }
        }
    }

    #[test]
    fn test_out_of_range_geometry_never_reaches_display() {
        for builder in [
            Builder::new().columns(200),
            Builder::new().column_offset(0x1F).columns(MAX_COLUMNS),
            Builder::new().pages(MAX_PAGES + 1),
        ] {
            assert!(builder.build().is_err());
        }
    }

    #[test]
    fn test_interface_error_propagates() {
        let interface = MockInterface {
            fail_after: Some(5),
            ..MockInterface::default()
        };
        let mut display = Display::new(interface, Builder::new().build().unwrap());
        assert!(matches!(display.show(&screen(2)), Err(Error::Interface(()))));
        assert_eq!(display.release().sent.len(), 5);
    }
}
