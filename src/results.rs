use crate::error::Error;
use chrono::Local;
use std::{
    fmt, fs,
    path::{Path, PathBuf},
};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Operation {
    Encrypt,
    Decrypt,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Operation::Encrypt => write!(f, "encrypt"),
            Operation::Decrypt => write!(f, "decrypt"),
        }
    }
}

pub struct ResultStore {
    path: PathBuf,
}

impl ResultStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes a result file named after the local timestamp, with three
    /// labeled lines: operation, input, output.
    pub fn save(&self, operation: Operation, input: &str, output: &str) -> Result<PathBuf, Error> {
        fs::create_dir_all(&self.path)?;
        let filename = format!("{}.txt", Local::now().format("%Y%m%d_%H%M%S"));
        let path = self.path.join(filename);
        let contents = format!("operation: {}\ninput: {}\noutput: {}\n", operation, input, output);
        fs::write(&path, contents)?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::{Operation, ResultStore};
    use std::fs;

    #[test]
    fn save() {
        let directory = tempfile::tempdir().unwrap();
        let store = ResultStore::new(directory.path().join("results"));
        let path = store.save(Operation::Encrypt, "ABC", "rOR1\nS7T: b06d6").unwrap();
        assert_eq!(path.extension().and_then(|e| e.to_str()), Some("txt"));
        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "operation: encrypt\ninput: ABC\noutput: rOR1\nS7T: b06d6\n");
    }

    #[test]
    fn save_creates_the_results_directory() {
        let directory = tempfile::tempdir().unwrap();
        let store = ResultStore::new(directory.path().join("nested").join("results"));
        store.save(Operation::Decrypt, "rOR1", "ABC\nS7T: b06d6").unwrap();
        assert!(store.path().is_dir());
    }
}
