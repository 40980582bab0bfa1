//! Sample Data Generator
//!
//! Generates a fraud-report CSV and an untagged-transaction CSV for
//! exercising the labeling pipeline without the real dataset.

use std::path::Path;

use anyhow::Result;
use rand::Rng;
use tracing::info;

const UNTAGGED_HEADER: &[&str] = &[
    "accountID",
    "transactionID",
    "transactionAmount",
    "localHour",
    "transactionDate",
    "transactionTime",
    "ipCountryCode",
    "paymentInstrumentType",
];

const FRAUD_HEADER: &[&str] = &["accountID", "transactionDate", "transactionTime"];

/// Transaction generator producing raw, untagged-export-shaped rows.
struct TransactionGenerator {
    rng: rand::rngs::ThreadRng,
    transaction_counter: u64,
}

impl TransactionGenerator {
    fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
            transaction_counter: 0,
        }
    }

    fn account_id(&mut self, accounts: usize) -> String {
        format!("A{:07}", self.rng.gen_range(0..accounts))
    }

    fn date(&mut self) -> String {
        format!(
            "2013{:02}{:02}",
            self.rng.gen_range(1..=12),
            self.rng.gen_range(1..=28)
        )
    }

    /// Times come out unpadded, the way raw exports carry them; the
    /// pipeline is responsible for zero-padding.
    fn time(&mut self) -> String {
        self.rng.gen_range(0..235959).to_string()
    }

    /// Generate one untagged transaction row.
    fn untagged_row(&mut self, accounts: usize) -> Vec<String> {
        self.transaction_counter += 1;
        let amount = self.rng.gen_range(1.0..2500.0);
        vec![
            self.account_id(accounts),
            format!("T{:010}", self.transaction_counter),
            format!("{:.2}", amount),
            self.rng.gen_range(0..24).to_string(),
            self.date(),
            self.time(),
            self.random_choice(&["US", "GB", "CA", "DE", "FR"]).to_string(),
            self.random_choice(&["CREDITCARD", "DEBITCARD", "PAYPAL"]).to_string(),
        ]
    }

    /// Generate the fraud-report rows for one compromised account: a burst
    /// of confirmed-fraud timestamps spanning a few days.
    fn fraud_rows(&mut self, account: &str) -> Vec<Vec<String>> {
        let month = self.rng.gen_range(1..=12);
        let start_day = self.rng.gen_range(1..=25);
        let reports = self.rng.gen_range(2..=5);

        (0..reports)
            .map(|_| {
                let day = start_day + self.rng.gen_range(0..3);
                vec![
                    account.to_string(),
                    format!("2013{:02}{:02}", month, day),
                    self.time(),
                ]
            })
            .collect()
    }

    fn random_choice<'a>(&mut self, choices: &[&'a str]) -> &'a str {
        choices[self.rng.gen_range(0..choices.len())]
    }
}

fn write_csv(path: &Path, header: &[&str], rows: &[Vec<String>]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(header)?;
    for row in rows {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("generate_transactions=info".parse()?),
        )
        .init();

    info!("Starting sample data generator");

    // Parse arguments
    let args: Vec<String> = std::env::args().collect();
    let output_dir = args.get(1).map(|s| s.as_str()).unwrap_or("data");
    let accounts: usize = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(50);
    let transactions: u64 = args.get(3).and_then(|s| s.parse().ok()).unwrap_or(1000);
    let compromised_rate: f64 = args.get(4).and_then(|s| s.parse().ok()).unwrap_or(0.1);

    info!(
        output_dir = %output_dir,
        accounts,
        transactions,
        compromised_rate,
        "Configuration loaded"
    );

    let mut generator = TransactionGenerator::new();

    // Untagged transactions across the whole account pool.
    let untagged: Vec<Vec<String>> = (0..transactions)
        .map(|_| generator.untagged_row(accounts))
        .collect();

    // Fraud reports for the compromised slice of the pool.
    let mut fraud = Vec::new();
    let mut compromised_count = 0;
    for account in 0..accounts {
        if generator.rng.gen_bool(compromised_rate) {
            compromised_count += 1;
            let account_id = format!("A{:07}", account);
            fraud.extend(generator.fraud_rows(&account_id));
        }
    }

    let output_dir = Path::new(output_dir);
    let fraud_path = output_dir.join("fraud_transactions.csv");
    let untagged_path = output_dir.join("untagged_transactions.csv");
    write_csv(&fraud_path, FRAUD_HEADER, &fraud)?;
    write_csv(&untagged_path, UNTAGGED_HEADER, &untagged)?;

    info!(
        fraud_rows = fraud.len(),
        untagged_rows = untagged.len(),
        compromised_accounts = compromised_count,
        fraud_file = %fraud_path.display(),
        untagged_file = %untagged_path.display(),
        "Sample data written"
    );

    Ok(())
}
