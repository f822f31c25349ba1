use serde::Deserialize;

use nomencrab::{Chain, Group, Substituent};

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

/// `hydrogen`, `ketone`, ... by group name; `radical:N` and `isoradical:N`
/// for side chains of N carbons.
fn parse_token(token: &str) -> Substituent {
    if let Some(n) = token.strip_prefix("radical:") {
        return Substituent::radical(n.parse().unwrap(), false).unwrap();
    }
    if let Some(n) = token.strip_prefix("isoradical:") {
        return Substituent::radical(n.parse().unwrap(), true).unwrap();
    }
    let group: Group = token.parse().unwrap();
    Substituent::of(group).unwrap()
}

fn build(carbons: &[Vec<String>]) -> Chain {
    let mut chain = Chain::new();
    for (i, tokens) in carbons.iter().enumerate() {
        if i > 0 {
            chain.next_carbon().unwrap();
        }
        for token in tokens {
            chain.add_substituent(parse_token(token)).unwrap();
        }
    }
    chain
}

fn report(kind: &str, failures: &[String], total: usize) {
    if !failures.is_empty() {
        panic!(
            "{kind}: {} of {total} entries failed:\n{}",
            failures.len(),
            failures.join("\n")
        );
    }
}

// ---------------------------------------------------------------------------
// Open chains
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct NameEntry {
    carbons: Vec<Vec<String>>,
    formula: String,
    name: String,
    #[serde(default)]
    named_formula: Option<String>,
}

#[test]
fn approval_chain_names() {
    let data: Vec<NameEntry> =
        serde_json::from_str(include_str!("approval_data/names.json")).unwrap();

    let mut failures = Vec::new();
    for entry in &data {
        let mut chain = build(&entry.carbons);

        let formula = chain.formula().unwrap();
        if formula != entry.formula {
            failures.push(format!(
                "[formula] {}: expected {:?}, got {formula:?}",
                entry.name, entry.formula
            ));
        }

        let name = match chain.name() {
            Ok(name) => name,
            Err(e) => {
                failures.push(format!("[name] {}: {e}", entry.formula));
                continue;
            }
        };
        if name != entry.name {
            failures.push(format!(
                "[name] {}: expected {:?}, got {name:?}",
                entry.formula, entry.name
            ));
        }

        if let Some(expected) = &entry.named_formula {
            let committed = chain.formula().unwrap();
            if &committed != expected {
                failures.push(format!(
                    "[named formula] {}: expected {expected:?}, got {committed:?}",
                    entry.name
                ));
            }
        }

        let again = chain.name().unwrap();
        if again != name {
            failures.push(format!("[idempotent] {name}: renamed to {again:?}"));
        }
    }

    report("chain names", &failures, data.len());
}

// ---------------------------------------------------------------------------
// Benzene rings
// ---------------------------------------------------------------------------

#[test]
fn approval_benzene_names() {
    let cases: [([&str; 6], &str); 6] = [
        (["hydrogen"; 6], "benceno"),
        (
            ["nitro", "hydrogen", "hydrogen", "hydrogen", "hydrogen", "hydrogen"],
            "nitrobenceno",
        ),
        (
            ["chlorine", "chlorine", "hydrogen", "hydrogen", "hydrogen", "hydrogen"],
            "o-diclorobenceno",
        ),
        (
            ["hydrogen", "iodine", "hydrogen", "chlorine", "hydrogen", "hydrogen"],
            "m-cloroyodobenceno",
        ),
        (
            ["alcohol", "hydrogen", "hydrogen", "alcohol", "hydrogen", "hydrogen"],
            "p-dihidroxibenceno",
        ),
        (
            ["chlorine", "hydrogen", "chlorine", "hydrogen", "chlorine", "hydrogen"],
            "1,3,5-triclorobenceno",
        ),
    ];

    let mut failures = Vec::new();
    for (tokens, expected) in &cases {
        let mut ring = nomencrab::Benzene::new();
        for (i, token) in tokens.iter().enumerate() {
            ring.add_substituent(i, parse_token(token)).unwrap();
        }
        let name = ring.name().unwrap();
        if name != *expected {
            failures.push(format!("{tokens:?}: expected {expected:?}, got {name:?}"));
        }
    }

    report("benzene names", &failures, cases.len());
}
