use std::io::{self, Write};

mod tokenizer;

use tokenizer::tokenize;

fn main() -> anyhow::Result<()> {
    let stdin = io::stdin();

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut buffer = String::new();
        if stdin.read_line(&mut buffer)? == 0 {
            // EOF (e.g. Ctrl-D)
            println!();
            break;
        }

        // Strip the line terminator only; interior and trailing spaces
        // belong to the tokenizer.
        let line = buffer.trim_end_matches(['\n', '\r']);

        for (i, token) in tokenize(line).iter().enumerate() {
            println!("{} {} {}", i, token.kind.tag(), token);
        }
    }

    Ok(())
}
