//! Display configuration types and builder

use crate::command::DEFAULT_ADDRESS;

/// Panel width in pixels
pub const WIDTH: usize = 128;

/// Panel height in pixels
pub const HEIGHT: usize = 64;

/// Number of 8-row pages
pub const PAGES: usize = HEIGHT / 8;

/// Number of 8-pixel character columns per page
pub const CHAR_COLUMNS: usize = WIDTH / 8;

/// Size of one full frame in bytes
pub const FRAME_SIZE: usize = WIDTH * HEIGHT / 8;

/// Which operations keep the in-memory framebuffer in step with the panel
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum CacheMode {
    /// Only pixel writes and clears update the cache
    ///
    /// Text, image, line and progress bar drawing go straight to the panel,
    /// so the cache no longer reflects the panel after them.
    #[default]
    PixelOnly,
    /// Every data byte sent to the panel is also written to the cache
    Mirror,
}

/// Display configuration
///
/// This struct holds the bus address and the operands of the bring-up
/// sequence. Use `Builder` to create a Config. The defaults reproduce the
/// reference SSD1306 128x64 bring-up byte for byte.
#[derive(Clone, Debug)]
pub struct Config {
    /// 7-bit I2C address
    pub address: u8,
    /// Clock divide ratio / oscillator frequency (operand of 0xD5)
    pub clock_div: u8,
    /// Multiplex ratio (operand of 0xA8)
    pub multiplex: u8,
    /// Display offset (operand of 0xD3)
    pub display_offset: u8,
    /// Charge pump setting (operand of 0x8D)
    pub charge_pump: u8,
    /// COM pins hardware configuration (operand of 0xDA)
    pub com_pins: u8,
    /// Contrast level (operand of 0x81)
    pub contrast: u8,
    /// Pre-charge period (operand of 0xD9)
    pub precharge: u8,
    /// VCOMH deselect level (operand of 0xDB)
    pub vcom_detect: u8,
    /// Cache coverage of drawing operations
    pub cache_mode: CacheMode,
}

impl Default for Config {
    fn default() -> Self {
        Builder::new().build()
    }
}

/// Builder for constructing display configuration
///
/// # Example
///
/// ```rust
/// use oled128x64::{Builder, CacheMode};
///
/// let config = Builder::new()
///     .address(0x3D)
///     .contrast(0x7F)
///     .cache_mode(CacheMode::Mirror)
///     .build();
/// assert_eq!(config.address, 0x3D);
/// ```
#[must_use]
pub struct Builder {
    address: u8,
    clock_div: u8,
    multiplex: u8,
    display_offset: u8,
    charge_pump: u8,
    com_pins: u8,
    contrast: u8,
    precharge: u8,
    vcom_detect: u8,
    cache_mode: CacheMode,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS,
            // Divide ratio 1, default oscillator frequency
            clock_div: 0x80,
            // 64 MUX
            multiplex: 0x3F,
            display_offset: 0x00,
            // Internal charge pump enabled
            charge_pump: 0x14,
            // Alternative COM pin layout, no left/right remap
            com_pins: 0x12,
            contrast: 0xCF,
            precharge: 0xF1,
            vcom_detect: 0x40,
            cache_mode: CacheMode::PixelOnly,
        }
    }
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the 7-bit I2C address
    ///
    /// No validation is performed; the value is stored as given.
    pub fn address(mut self, address: u8) -> Self {
        self.address = address;
        self
    }

    /// Set the clock divide ratio / oscillator frequency
    pub fn clock_div(mut self, value: u8) -> Self {
        self.clock_div = value;
        self
    }

    /// Set the multiplex ratio
    pub fn multiplex(mut self, value: u8) -> Self {
        self.multiplex = value;
        self
    }

    /// Set the vertical display offset
    pub fn display_offset(mut self, value: u8) -> Self {
        self.display_offset = value;
        self
    }

    /// Set the charge pump operand
    pub fn charge_pump(mut self, value: u8) -> Self {
        self.charge_pump = value;
        self
    }

    /// Set the COM pins hardware configuration
    pub fn com_pins(mut self, value: u8) -> Self {
        self.com_pins = value;
        self
    }

    /// Set the contrast level
    pub fn contrast(mut self, value: u8) -> Self {
        self.contrast = value;
        self
    }

    /// Set the pre-charge period
    pub fn precharge(mut self, value: u8) -> Self {
        self.precharge = value;
        self
    }

    /// Set the VCOMH deselect level
    pub fn vcom_detect(mut self, value: u8) -> Self {
        self.vcom_detect = value;
        self
    }

    /// Set which drawing operations update the framebuffer cache
    pub fn cache_mode(mut self, mode: CacheMode) -> Self {
        self.cache_mode = mode;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Config {
        Config {
            address: self.address,
            clock_div: self.clock_div,
            multiplex: self.multiplex,
            display_offset: self.display_offset,
            charge_pump: self.charge_pump,
            com_pins: self.com_pins,
            contrast: self.contrast,
            precharge: self.precharge,
            vcom_detect: self.vcom_detect,
            cache_mode: self.cache_mode,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geometry() {
        assert_eq!(PAGES, 8);
        assert_eq!(CHAR_COLUMNS, 16);
        assert_eq!(FRAME_SIZE, 1024);
    }

    #[test]
    fn test_default_config_matches_reference_bring_up() {
        let config = Config::default();
        assert_eq!(config.address, 0x3C);
        assert_eq!(config.clock_div, 0x80);
        assert_eq!(config.multiplex, 0x3F);
        assert_eq!(config.charge_pump, 0x14);
        assert_eq!(config.com_pins, 0x12);
        assert_eq!(config.contrast, 0xCF);
        assert_eq!(config.precharge, 0xF1);
        assert_eq!(config.vcom_detect, 0x40);
        assert_eq!(config.cache_mode, CacheMode::PixelOnly);
    }

    #[test]
    fn test_builder_overrides() {
        let config = Builder::new()
            .address(0x3D)
            .contrast(0x10)
            .cache_mode(CacheMode::Mirror)
            .build();
        assert_eq!(config.address, 0x3D);
        assert_eq!(config.contrast, 0x10);
        assert_eq!(config.cache_mode, CacheMode::Mirror);
        // Untouched fields keep their defaults
        assert_eq!(config.precharge, 0xF1);
    }
}
