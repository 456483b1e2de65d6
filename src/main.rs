pub mod alphabet;
pub mod configuration;
pub mod error;
pub mod hex;
pub mod logger;
pub mod results;
pub mod s7;
pub mod s7t;

use self::{
    configuration::Configuration,
    error::Error,
    logger::Logger,
    results::{Operation, ResultStore},
};
use std::io::{self, BufRead, Write};

fn prompt(message: &str) -> Result<String, Error> {
    print!("{}", message);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn run(choice: &str, text: &str) -> Result<(Operation, String), Error> {
    match choice {
        "1" => {
            let encoded = s7::encode(text.as_bytes());
            let token = s7t::compute_token(&encoded);
            println!("\nEncoded:\n{}", encoded);
            println!("S7T: {}", token);
            Ok((Operation::Encrypt, format!("{}\nS7T: {}", encoded, token)))
        }
        "2" => {
            let decoded = s7::decode_string(text)?;
            let token = s7t::rederive_token(decoded.as_bytes());
            println!("\nDecoded:\n{}", decoded);
            println!("Original S7T: {}", token);
            Ok((Operation::Decrypt, format!("{}\nS7T: {}", decoded, token)))
        }
        choice => Err(Error::new(format!("Invalid selection '{}'", choice))),
    }
}

fn main() {
    let configuration = Configuration::new();
    let logger = Logger::new();
    let store = ResultStore::new(configuration.results_path());

    println!("=== S7 codec ===");
    println!("1. Encrypt\n2. Decrypt");

    let result = prompt("Select operation (1/2): ")
        .and_then(|choice| prompt("Input text: ").map(|text| (choice, text)))
        .and_then(|(choice, text)| {
            let (operation, output) = run(&choice, &text)?;
            store.save(operation, &text, &output)
        });

    match result {
        Ok(path) => logger.log(format!("Result saved to {}", path.display())),
        Err(error) => eprintln!("Error: {}", error),
    }
}

#[cfg(test)]
mod tests {
    use super::results::Operation;

    #[test]
    fn run_encrypt() {
        let (operation, output) = super::run("1", "ABC").unwrap();
        assert_eq!(operation, Operation::Encrypt);
        assert_eq!(output, "rOR1\nS7T: b06d6");
    }

    #[test]
    fn run_decrypt_rederives_the_encrypt_token() {
        let (_, encrypted) = super::run("1", "Hello world").unwrap();
        let (operation, output) = super::run("2", "m53Ev5zYLXhGv5r_").unwrap();
        assert_eq!(operation, Operation::Decrypt);
        assert_eq!(output, "Hello world\nS7T: ae0ee");
        assert_eq!(encrypted.rsplit(' ').next(), output.rsplit(' ').next());
    }

    #[test]
    fn run_rejects_invalid_selection() {
        assert!(super::run("3", "ABC").is_err());
    }

    #[test]
    fn run_reports_decode_errors() {
        let error = super::run("2", "a!").unwrap_err();
        assert_eq!(error.message(), "Invalid character '!' at index 1");
    }
}
