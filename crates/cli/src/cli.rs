use clap::{Args, Parser, Subcommand};

use productdesk_form::FieldInput;
use productdesk_observability::LogFormat;
use productdesk_products::{Color, Size};

/// Create products in the CMS from the command line.
#[derive(Parser, Debug, Clone)]
#[command(name = "productdesk", version, about, long_about = None)]
pub struct Cli {
    /// Log output format (json or pretty)
    #[arg(long, global = true, env = "PRODUCTDESK_LOG_FORMAT", default_value = "json")]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Validate the fields and create the product document
    Create {
        #[command(flatten)]
        fields: ProductArgs,

        /// Use an in-memory store instead of the CMS
        #[arg(long)]
        dry_run: bool,

        /// Clear the form after a successful create
        #[arg(long)]
        reset_on_success: bool,
    },
    /// Validate the fields without creating anything
    Validate {
        #[command(flatten)]
        fields: ProductArgs,
    },
    /// Print the studio schema for the product document
    Schema,
}

/// Form fields as flags. Each `--size`/`--color` toggles one checkbox.
#[derive(Args, Debug, Clone, Default)]
pub struct ProductArgs {
    /// Product name
    #[arg(long, default_value = "")]
    pub name: String,

    /// Product description
    #[arg(long, default_value = "")]
    pub description: String,

    /// Size to toggle (XL, L, M, S, XS); repeatable
    #[arg(long = "size")]
    pub sizes: Vec<Size>,

    /// Color to toggle (Purple, Black, Gold); repeatable
    #[arg(long = "color")]
    pub colors: Vec<Color>,

    /// Price as typed into the number input
    #[arg(long, default_value = "0")]
    pub price: String,

    /// Inventory as typed into the number input
    #[arg(long, default_value = "0")]
    pub inventory: String,
}

impl ProductArgs {
    /// Replay the flags as the interactions a user would make, in form order.
    pub fn inputs(&self) -> Vec<FieldInput> {
        let mut inputs = vec![
            FieldInput::ProductName(self.name.clone()),
            FieldInput::Description(self.description.clone()),
        ];
        inputs.extend(self.sizes.iter().copied().map(FieldInput::ToggleSize));
        inputs.extend(self.colors.iter().copied().map(FieldInput::ToggleColor));
        inputs.push(FieldInput::Price(self.price.clone()));
        inputs.push(FieldInput::Inventory(self.inventory.clone()));
        inputs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_with_fields() {
        let cli = Cli::parse_from([
            "productdesk",
            "create",
            "--name",
            "Shoe",
            "--description",
            "A comfortable running shoe",
            "--size",
            "M",
            "--size",
            "xl",
            "--color",
            "black",
            "--price",
            "49.5",
            "--inventory",
            "10",
            "--dry-run",
        ]);
        let Command::Create {
            fields,
            dry_run,
            reset_on_success,
        } = cli.command
        else {
            panic!("expected create");
        };
        assert!(dry_run);
        assert!(!reset_on_success);
        assert_eq!(fields.sizes, vec![Size::M, Size::XL]);
        assert_eq!(fields.colors, vec![Color::Black]);
        assert_eq!(cli.log_format, LogFormat::Json);

        assert_eq!(
            fields.inputs(),
            vec![
                FieldInput::ProductName("Shoe".into()),
                FieldInput::Description("A comfortable running shoe".into()),
                FieldInput::ToggleSize(Size::M),
                FieldInput::ToggleSize(Size::XL),
                FieldInput::ToggleColor(Color::Black),
                FieldInput::Price("49.5".into()),
                FieldInput::Inventory("10".into()),
            ]
        );
    }

    #[test]
    fn test_defaults_are_an_empty_form() {
        let cli = Cli::parse_from(["productdesk", "validate"]);
        let Command::Validate { fields } = cli.command else {
            panic!("expected validate");
        };
        assert_eq!(fields.name, "");
        assert!(fields.sizes.is_empty());
        assert_eq!(fields.price, "0");
        assert_eq!(fields.inventory, "0");
    }

    #[test]
    fn test_unknown_option_is_rejected() {
        assert!(Cli::try_parse_from(["productdesk", "validate", "--size", "XXL"]).is_err());
        assert!(Cli::try_parse_from(["productdesk", "validate", "--color", "Red"]).is_err());
    }

    #[test]
    fn test_global_log_format() {
        let cli = Cli::parse_from(["productdesk", "schema", "--log-format", "pretty"]);
        assert_eq!(cli.log_format, LogFormat::Pretty);
        assert!(matches!(cli.command, Command::Schema));
    }
}
