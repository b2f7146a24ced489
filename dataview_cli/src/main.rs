mod script;
mod view_cli;

use clap::{Arg, App};
use crate::view_cli::view_main;

fn main() {
    let matches = App::new("DataView CLI")
        .version("1.0")
        .about("Reads and writes typed numbers in a byte buffer")
        .arg(
            Arg::with_name("buffer")
                .short("b")
                .long("buffer")
                .value_name("HEX")
                .help("The initial buffer content as hex")
                .required_unless("size")
                .conflicts_with("size")
                .takes_value(true)
        )
        .arg(
            Arg::with_name("size")
                .short("s")
                .long("size")
                .value_name("BYTES")
                .help("Start from a zero filled buffer of this size")
                .conflicts_with("buffer")
                .takes_value(true)
        )
        .arg(
            Arg::with_name("offset")
                .short("o")
                .long("offset")
                .value_name("OFFSET")
                .help("The byteOffset passed to the constructor")
                .takes_value(true)
        )
        .arg(
            Arg::with_name("length")
                .short("l")
                .long("length")
                .value_name("LENGTH")
                .help("The byteLength passed to the constructor")
                .takes_value(true)
        )
        .arg(
            Arg::with_name("execute")
                .short("e")
                .long("execute")
                .value_name("CALL")
                .help("A method call like 'setUint32 0 0x01020304 true', or 'detach'; may be repeated")
                .multiple(true)
                .number_of_values(1)
                .takes_value(true)
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .multiple(true)
                .help("Sets the level of verbosity (''=warn, 'v'=info, 'vv'=debug, 'vvv'=trace)")
                .takes_value(false)
        )
        .get_matches();

    view_main(matches);
}
