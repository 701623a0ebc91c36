use lvlog::Level;
use pretty_assertions::assert_eq;
use std::sync::{Arc, Barrier};

// Runs in its own process, so these threads race for the very first access.
#[test]
fn test_default_logger_created_once() {
    const THREADS: usize = 16;

    let barrier = Arc::new(Barrier::new(THREADS));
    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let barrier = barrier.clone();
            std::thread::spawn(move || {
                barrier.wait();
                lvlog::default_logger() as *const lvlog::Logger as usize
            })
        })
        .collect();
    let addrs: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    let logger = lvlog::default_logger();
    for addr in addrs {
        assert!(std::ptr::eq(addr as *const lvlog::Logger, logger));
    }
    assert_eq!(
        logger.name(),
        format!("default_once.rs[{}]", std::process::id())
    );
    assert_eq!(logger.level(), Level::TRACE);
}
