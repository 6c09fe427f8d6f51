use repute::ledger::{voting_weight, MIN_REPUTATION, REPUTATION_CAP};

/// Print the voting weight for a reputation value
pub fn execute(reputation: u64) {
    println!("{}", describe(reputation));
}

fn describe(reputation: u64) -> String {
    let mut out = format!(
        "reputation {} -> weight {}",
        reputation,
        voting_weight(reputation)
    );

    if reputation < MIN_REPUTATION {
        out.push_str(&format!(
            "\n  (below the minimum of {}: cannot vote)",
            MIN_REPUTATION
        ));
    } else if reputation > REPUTATION_CAP {
        out.push_str(&format!(
            "\n  (above the cap of {}: unreachable on the ledger)",
            REPUTATION_CAP
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_below_minimum() {
        let text = describe(9);
        assert!(text.starts_with("reputation 9 -> weight 0"));
        assert!(text.contains("below the minimum of 10"));
    }

    #[test]
    fn test_describe_in_range() {
        assert_eq!(describe(100), "reputation 100 -> weight 4");
        assert_eq!(describe(1000), "reputation 1000 -> weight 5");
    }

    #[test]
    fn test_describe_above_cap() {
        let text = describe(5000);
        assert!(text.starts_with("reputation 5000 -> weight"));
        assert!(text.contains("above the cap of 1000"));
    }
}
