//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "clinic-export.toml")]
    pub output: String,

    /// Include the optional sections with comments
    #[arg(long)]
    pub with_examples: bool,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing Clinic Export configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2);
        }

        let config_content = if self.with_examples {
            Self::generate_config_with_examples()
        } else {
            Self::generate_minimal_config()
        };

        match fs::write(&self.output, config_content) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your store URL", self.output);
                println!("  2. Create a .env file with your credentials:");
                println!("     - Set CLINIC_EXPORT_STORE_KEY");
                println!("     - Set RESEND_API_KEY (if the notifier is enabled)");
                println!("  3. Validate configuration: clinic-export validate-config");
                println!("  4. Run export: clinic-export export");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {e}");
                Ok(5)
            }
        }
    }

    /// Generate minimal configuration
    fn generate_minimal_config() -> String {
        r#"# Clinic Export Configuration File

[application]
log_level = "info"

[store]
base_url = "https://project.supabase.co"
api_key = "${CLINIC_EXPORT_STORE_KEY}"
timeout_seconds = 30

[export]
output_dir = "./exports"
"#
        .to_string()
    }

    /// Generate configuration with every section documented
    fn generate_config_with_examples() -> String {
        r#"# Clinic Export Configuration File
#
# Values of the form ${VAR} are read from the environment (or .env).
# Any setting can also be overridden with CLINIC_EXPORT_<SECTION>_<KEY>,
# e.g. CLINIC_EXPORT_EXPORT_OUTPUT_DIR=/srv/exports

[application]
# trace | debug | info | warn | error
log_level = "info"

[store]
# Backend project URL; collections are read from {base_url}/rest/v1/{table}
base_url = "https://project.supabase.co"

# Key sent as the apikey header and bearer token
api_key = "${CLINIC_EXPORT_STORE_KEY}"

# Per-request timeout in seconds (1-600)
timeout_seconds = 30

[export]
# Directory the dated workbook is written to; created if missing
output_dir = "./exports"

[notifier]
# Send booking confirmation emails (notify-booking)
enabled = false
endpoint = "https://api.resend.com/emails"
# api_key = "${RESEND_API_KEY}"
customer_sender = "Hilomè Skin Clinic <onboarding@resend.dev>"
operator_sender = "Hilomè Booking System <onboarding@resend.dev>"
operator_address = "cruzskin@gmail.com"
timeout_seconds = 30

[logging]
# Write JSON logs to a rotating file in addition to the console
local_enabled = false
local_path = "./logs"
# daily | hourly | never
local_rotation = "daily"
"#
        .to_string()
    }
}
