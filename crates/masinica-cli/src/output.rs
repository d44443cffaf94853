//! Output formatting module

use masinica_domain::{Event, EventStatus, Urgency};
use masinica_types::{OutputFormat, Result};
use serde::Serialize;

/// Rendering settings for one invocation
pub struct Printer<'a> {
    pub format: OutputFormat,
    pub date_format: &'a str,
}

impl Printer<'_> {
    fn json<T: Serialize + ?Sized>(&self, value: &T) -> Result<()> {
        let content = serde_json::to_string_pretty(value)?;
        println!("{}", content);
        Ok(())
    }

    pub fn vehicles(&self, plates: &[String]) -> Result<()> {
        if self.format == OutputFormat::Json {
            return self.json(plates);
        }

        if plates.is_empty() {
            println!("No vehicles added yet.");
            println!("Run `masinica vehicle add <PLATE>` to add a new vehicle.");
            return Ok(());
        }

        println!("\nVehicles");
        println!("========");
        for plate in plates {
            println!("  {}", plate);
        }
        Ok(())
    }

    /// `empty` is printed in place of the table when there is nothing to show
    pub fn statuses(
        &self,
        title: &str,
        statuses: &[EventStatus],
        show_vehicle: bool,
        empty: &str,
    ) -> Result<()> {
        if self.format == OutputFormat::Json {
            return self.json(statuses);
        }

        println!("\n{}", title);
        println!("{}", "=".repeat(title.chars().count()));

        if statuses.is_empty() {
            println!("{}", empty);
            return Ok(());
        }

        for status in statuses {
            let vehicle = if show_vehicle {
                format!("{:<12} ", status.event.vehicle)
            } else {
                String::new()
            };
            println!(
                "  {}{:<10} {:>10}  {:>10}  {}{}",
                vehicle,
                status.event.label,
                status.event.expiration_date.format(self.date_format).to_string(),
                status.expiration.badge(),
                status.expiration.urgency,
                urgency_marker(status.expiration.urgency),
            );
        }
        Ok(())
    }

    pub fn status(&self, status: &EventStatus) -> Result<()> {
        if self.format == OutputFormat::Json {
            return self.json(status);
        }

        println!("\n{} - {}", status.event.vehicle, status.event.label);
        println!("===============");
        println!("{}: {}", status.event.label, status.expiration.describe());
        println!(
            "Expiration Date: {}",
            status.event.expiration_date.format(self.date_format)
        );
        println!("Urgency:         {}", status.expiration.urgency);
        Ok(())
    }

    pub fn event_saved(&self, verb: &str, event: &Event) -> Result<()> {
        if self.format == OutputFormat::Json {
            return self.json(event);
        }
        println!(
            "{} {} for {} (expires {})",
            verb,
            event.label,
            event.vehicle,
            event.expiration_date.format(self.date_format)
        );
        Ok(())
    }

    /// Confirm a mutation: `text` for tables, `value` for JSON
    pub fn done<T: Serialize>(&self, text: &str, value: &T) -> Result<()> {
        if self.format == OutputFormat::Json {
            return self.json(value);
        }
        println!("{}", text);
        Ok(())
    }
}

fn urgency_marker(urgency: Urgency) -> &'static str {
    match urgency {
        Urgency::Critical => " !!",
        Urgency::Warning => " !",
        Urgency::Normal => "",
    }
}
