#![no_main]
use libfuzzer_sys::fuzz_target;
use stamplog::fmt::printf::{Arg, parse, sprintf, try_sprintf};

fuzz_target!(|data: &str| {
    // Must not panic on any format string
    let _ = parse(data);

    let args = [
        Arg::from("text"),
        Arg::from(-42),
        Arg::from(u64::MAX),
        Arg::from(1.5e300),
        Arg::from(true),
        Arg::from('\u{1F600}'),
    ];
    for n in 0..=args.len() {
        let lenient = sprintf(data, &args[..n]);
        // Whenever strict mode accepts, both modes agree.
        if let Ok(strict) = try_sprintf(data, &args[..n]) {
            assert_eq!(strict, lenient);
        }
    }
});
