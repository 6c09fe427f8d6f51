/// Display version information
pub fn execute() {
    println!("repute {}", env!("CARGO_PKG_VERSION"));
    println!("Deterministic reputation-weighted governance ledger");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_execute() {
        // Version command should not panic
        execute();
    }
}
