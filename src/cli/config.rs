use crate::error::Result;
use crate::settings::{load_settings, save_settings, settings_path};

pub fn show() -> Result<()> {
    let settings = load_settings();
    println!("Settings:    {}", settings_path().display());
    println!("Account:     {}", settings.account_name);
    println!("Pretty JSON: {}", settings.pretty_json);
    Ok(())
}

pub fn set_account(name: &str) -> Result<()> {
    let mut settings = load_settings();
    settings.account_name = name.trim().to_string();
    save_settings(&settings)?;
    println!("Default account set to {}", settings.account_name);
    Ok(())
}

pub fn set_pretty(value: bool) -> Result<()> {
    let mut settings = load_settings();
    settings.pretty_json = value;
    save_settings(&settings)?;
    println!("Pretty JSON {}", if value { "enabled" } else { "disabled" });
    Ok(())
}
