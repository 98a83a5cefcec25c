//! Board functions the keymap can trigger but not implement itself.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::CriticalSectionMutex;

pub type ResetFn = &'static (dyn Fn() + Sync);

static BOOTLOADER: CriticalSectionMutex<RefCell<Option<ResetFn>>> =
    CriticalSectionMutex::new(RefCell::new(None));

/// Register the function that restarts the MCU into its bootloader; `None` unregisters it.
///
/// ```
/// use bdn9_firmware::firmware_functions::handle_reset_to_bootloader;
/// # mod rom_data { pub fn reset_to_usb_boot(_: u32, _: u32) {} }
///
/// fn to_bootloader() {
///     rom_data::reset_to_usb_boot(0, 0);
/// }
///
/// handle_reset_to_bootloader(Some(&to_bootloader));
/// ```
pub fn handle_reset_to_bootloader(value: Option<ResetFn>) {
    BOOTLOADER.lock(|r| {
        *r.borrow_mut() = value;
    });
}

/// Run the registered bootloader function. Returns `false` if none is registered.
pub fn reset_to_bootloader() -> bool {
    match BOOTLOADER.lock(|r| *r.borrow()) {
        Some(f) => {
            crate::info!("Jumping to bootloader.");
            f();
            true
        }
        None => {
            crate::warn!("no bootloader function registered");
            false
        }
    }
}

#[cfg(test)]
#[path = "firmware_functions_test.rs"]
mod test;
