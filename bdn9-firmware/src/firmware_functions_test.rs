use core::sync::atomic::{AtomicU32, Ordering};

use super::*;

static CALLS: AtomicU32 = AtomicU32::new(0);

fn count_call() {
    CALLS.fetch_add(1, Ordering::SeqCst);
}

#[test]
fn bootloader_hook() {
    handle_reset_to_bootloader(None);
    assert!(!reset_to_bootloader());

    handle_reset_to_bootloader(Some(&count_call));
    assert!(reset_to_bootloader());
    assert!(reset_to_bootloader());
    assert_eq!(CALLS.load(Ordering::SeqCst), 2);

    handle_reset_to_bootloader(None);
    assert!(!reset_to_bootloader());
    assert_eq!(CALLS.load(Ordering::SeqCst), 2);
}
