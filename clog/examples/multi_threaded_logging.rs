use std::sync::mpsc::channel;

use clog::{Attributes, LogLevel, Stream};

fn main() {
    // main thread logs to stdout
    clog::init(None, Attributes::NONE).unwrap();
    if !cfg!(debug_assertions) {
        clog::set_ignored_types(LogLevel::Debug).unwrap();
    }
    clog::info!("Hello, world!\n").unwrap();
    for (i, arg) in std::env::args().enumerate() {
        clog::trace!("argument {i}: {arg}\n").unwrap();
    }
    clog::debug!("only printed in debug builds\n").unwrap();

    // worker threads share the global logger
    let (handles, senders): (Vec<_>, Vec<_>) = (0..5)
        .map(|i| {
            let (sender, receiver) = channel::<&'static str>();
            (
                std::thread::spawn(move || {
                    for message in receiver {
                        clog::warning!("thread {i} received: {message}\n").unwrap();
                    }
                }),
                sender,
            )
        })
        .unzip();
    for sender in senders {
        sender.send("Hello, world!").unwrap();
    }
    for handle in handles {
        handle.join().unwrap();
    }

    clog::set_output_stream(Some(Stream::Stderr)).unwrap();
    clog::error!("Oh no! {}\n", 10).unwrap();
    clog::fatal!("Oh no!\n").unwrap();

    let path = std::env::temp_dir().join("clog_example.log");
    clog::set_output_file(&path).unwrap();
    clog::trace!("Tracey things... {}\n", 10).unwrap();
    clog::info!("Need to report some info... {}\n", 86).unwrap();
    clog::terminate().unwrap();

    println!(
        "last line of {} is:\n\t{}",
        path.display(),
        std::fs::read_to_string(&path)
            .unwrap()
            .lines()
            .last()
            .unwrap()
    );
}
