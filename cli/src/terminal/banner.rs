use colored::*;

use crate::terminal::print;

const LOGO: [&str; 2] = [
    "▄▀█ █▀█ █▀█ █ █ █ ▄▀█ █▀█ █▀▄ █▀▀ █▄ █",
    "█▀█ █▀▄ █▀▀ ▀▄▀▄▀ █▀█ █▀▄ █▄▀ ██▄ █ ▀█",
];

pub fn print() {
    print::print("");
    for line in LOGO {
        print::centerln(&line.bright_green().to_string());
    }
    print::centerln(&"watching the wire for liars".italic().bright_black().to_string());
    print::print("");
}
