//! `fragsite check-email <email>` – the form's email check.

use anyhow::Result;
use fragsite_core::email::is_valid_email;

pub fn run_check_email(email: &str) -> Result<()> {
    if !is_valid_email(email) {
        anyhow::bail!("{:?} is not a valid email address", email);
    }
    println!("valid");
    Ok(())
}
