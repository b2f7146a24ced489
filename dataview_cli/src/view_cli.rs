use clap::ArgMatches;
use log::{LevelFilter, info};
use dataview_lib::buffer::{ArrayBuffer, BufferCapability};
use dataview_lib::error::ErrorType;
use dataview_lib::value::Value;
use dataview_lib::view::{CallKind, DataViewConstructor, DataViewPrototype};
use crate::script::{Command, parse_line, parse_token, display_value};
use std::process::exit;

pub fn view_main(matches: ArgMatches) {
    let log_level = match matches.occurrences_of("verbose") {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::builder().filter_level(log_level).init();

    let buffer = match matches.value_of("buffer") {
        Some(content) => ArrayBuffer::from_bytes(hex::decode(content).expect("invalid hex buffer")),
        None => ArrayBuffer::new(
            matches.value_of("size").expect("size not specified")
                .parse().expect("invalid size")
        ),
    };

    let mut constructor_args = vec![Value::Buffer(buffer.clone())];
    match (matches.value_of("offset"), matches.value_of("length")) {
        (Some(offset), Some(length)) => {
            constructor_args.push(parse_token(offset));
            constructor_args.push(parse_token(length));
        }
        (Some(offset), None) => constructor_args.push(parse_token(offset)),
        (None, Some(length)) => {
            constructor_args.push(Value::Number(0.0));
            constructor_args.push(parse_token(length));
        }
        (None, None) => {}
    }

    let view = DataViewConstructor::construct(CallKind::Construct, &constructor_args)
        .unwrap_or_else(|e| fail(&e));
    info!("view covers {} bytes at offset {}", view.byte_length(), view.byte_offset());
    let this = Value::View(view);

    let prototype = DataViewPrototype::install();
    for line in matches.values_of("execute").into_iter().flatten() {
        match parse_line(line) {
            None => continue,
            Some(Command::Detach) => {
                if buffer.detach().is_none() {
                    info!("buffer already detached");
                }
            }
            Some(Command::Call { method, args }) => {
                let result = prototype.invoke(&method, &this, &args)
                    .unwrap_or_else(|e| fail(&e));
                println!("{} = {}", line.trim(), display_value(&result));
            }
        }
    }

    if buffer.is_detached() {
        println!("buffer: detached");
    } else {
        println!("buffer: {}", hex::encode(buffer.to_vec()));
    }
}

fn fail(error: &ErrorType) -> ! {
    eprintln!("{}: {}", error.error_class(), error);
    exit(1)
}
