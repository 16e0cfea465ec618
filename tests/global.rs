//! Tests for the process-wide default logger.

use stamplog::{ExitHook, Logger, global, replace_exit_hook};
use std::sync::Arc;
use std::sync::atomic::{AtomicI32, Ordering};

fn recorder() -> (ExitHook, Arc<AtomicI32>) {
    let seen = Arc::new(AtomicI32::new(0));
    let handle = Arc::clone(&seen);
    let hook = ExitHook::new(move |code| handle.store(code, Ordering::SeqCst));
    (hook, seen)
}

// One test owns the override slot so parallel tests can't observe each other's hooks.
#[test]
fn exit_hook_override_is_scoped() {
    let (outer, outer_seen) = recorder();
    let (inner, inner_seen) = recorder();

    {
        let _outer = replace_exit_hook(outer);
        assert!(!global::exit_hook().is_process_exit());
        stamplog::fatal!("outer %d", 1);
        assert_eq!(outer_seen.load(Ordering::SeqCst), 1);

        {
            let _inner = replace_exit_hook(inner);
            stamplog::fatal("inner", &[]);
            assert_eq!(inner_seen.load(Ordering::SeqCst), 1);
        }

        outer_seen.store(0, Ordering::SeqCst);
        inner_seen.store(0, Ordering::SeqCst);
        global::fatal("restored to outer", &[]);
        assert_eq!(outer_seen.load(Ordering::SeqCst), 1);
        assert_eq!(inner_seen.load(Ordering::SeqCst), 0);
    }

    // Outer guard dropped: the default logger is back on the real exit.
    assert!(global::exit_hook().is_process_exit());
}

#[test]
fn init_after_first_use_is_rejected() {
    stamplog::info!("touch the default logger");
    assert!(global::init(Logger::new()).is_err());
}

#[test]
fn free_functions_do_not_panic() {
    stamplog::info("info %s", &["line".into()]);
    stamplog::error("error %v", &[true.into()]);
    stamplog::error!("macro %d%%", 50);
}
