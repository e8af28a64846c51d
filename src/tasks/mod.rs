mod usb;
mod display;
mod keypad;

pub use display::init as init_display;
pub use display::{Screen, DISPLAY_CHANNEL};
pub use keypad::init as init_keypad;
pub use usb::init as init_usb;
