pub const DEFAULT_ADDRESS: u8 = 0x70; // A0-A2 jumpers open
pub const CELL_COUNT: usize = 4;
pub const EXTRA_GLYPHS: usize = 16; // custom glyphs outside printable ASCII
pub const MAX_BRIGHTNESS: u8 = 15; // 4 bits
pub const DOT_MASK: u16 = 0x4000; // bit 14: decimal point
pub const FRAME_LEN: usize = 1 + CELL_COUNT * 2;
pub const MIN_NUMBER: i32 = -999;
pub const MAX_NUMBER: i32 = 9999;

pub mod command {
    pub const DISPLAY_RAM: u8 = 0x00; // display data address pointer, row 0
    pub const SYSTEM_SETUP: u8 = 0x20;
    pub const DISPLAY_SETUP: u8 = 0x80;
    pub const DIMMING: u8 = 0xE0;

    pub mod system_setup {
        pub const STANDBY: u8 = 0x00; // bit 0 clear: oscillator off
        pub const OSCILLATOR_ON: u8 = 0x01; // bit 0 set: normal operation
    }

    pub mod display_setup {
        pub const DISPLAY_OFF: u8 = 0x00; // bit 0 clear
        pub const DISPLAY_ON: u8 = 0x01; // bit 0 set
        pub const BLINK_SHIFT: u8 = 1; // bits 2:1: blink frequency
    }
}
