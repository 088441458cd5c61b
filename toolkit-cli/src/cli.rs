use std::io::Write;

use clap::{
    ArgAction, CommandFactory, Parser, Subcommand,
    builder::{PossibleValuesParser, TypedValueParser},
};
use tracing::{debug, info};

use toolkit_core::{
    Config, ContactAction, ContactCommand, Operation, ProviderId, Quantity, TodoAction,
    TodoCommand, ToolError, WeatherRequest, arithmetic, contact, convert,
    provider::default_provider_from_config, todo,
};

use crate::output::{self, OutputFormat};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "toolkit", version, about = "A multi-purpose CLI tool")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Log more detail to stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// How command results are printed.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,

    /// Weather provider to query; defaults to the configured one.
    #[arg(long, global = true, value_parser = choice::<ProviderId>())]
    pub provider: Option<ProviderId>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Perform arithmetic operations.
    #[command(allow_negative_numbers = true)]
    Arithmetic {
        /// The operation to perform.
        #[arg(value_parser = choice::<Operation>())]
        operation: Operation,

        /// The first number.
        a: f64,

        /// The second number.
        b: f64,
    },

    /// Manage your to-do list.
    Todo {
        /// The action to perform on the to-do list.
        #[arg(value_parser = choice::<TodoAction>())]
        action: TodoAction,

        /// The to-do item (required for add and remove actions).
        #[arg(required_if_eq_any = [("action", "add"), ("action", "remove")])]
        item: Option<String>,
    },

    /// Get the current weather information.
    Weather {
        /// The city to get the weather for.
        city: String,
    },

    /// Manage your contacts.
    Contact {
        /// The action to perform on the contacts.
        #[arg(value_parser = choice::<ContactAction>())]
        action: ContactAction,

        /// The contact's name (required for add and remove actions).
        #[arg(long, required_if_eq_any = [("action", "add"), ("action", "remove")])]
        name: Option<String>,

        /// The contact's phone number.
        #[arg(long)]
        phone: Option<String>,

        /// The contact's email address.
        #[arg(long)]
        email: Option<String>,
    },

    /// Convert between units.
    #[command(allow_negative_numbers = true)]
    Convert {
        /// The type of unit conversion.
        #[arg(value_name = "TYPE", value_parser = choice::<Quantity>())]
        quantity: Quantity,

        /// The value to convert.
        value: f64,

        /// The unit to convert from.
        from_unit: String,

        /// The unit to convert to.
        to_unit: String,
    },
}

/// Core enums that can be picked by name on the command line.
trait Choice: for<'a> TryFrom<&'a str, Error = ToolError> + Clone + Send + Sync + 'static {
    fn names() -> Vec<&'static str>;
}

impl Choice for Operation {
    fn names() -> Vec<&'static str> {
        Operation::all().iter().map(Operation::as_str).collect()
    }
}

impl Choice for TodoAction {
    fn names() -> Vec<&'static str> {
        TodoAction::all().iter().map(TodoAction::as_str).collect()
    }
}

impl Choice for ContactAction {
    fn names() -> Vec<&'static str> {
        ContactAction::all().iter().map(ContactAction::as_str).collect()
    }
}

impl Choice for Quantity {
    fn names() -> Vec<&'static str> {
        Quantity::all().iter().map(Quantity::as_str).collect()
    }
}

impl Choice for ProviderId {
    fn names() -> Vec<&'static str> {
        ProviderId::all().iter().map(ProviderId::as_str).collect()
    }
}

/// Value parser that lists `T`'s names in help and rejects anything else.
fn choice<T: Choice>() -> impl TypedValueParser<Value = T> {
    PossibleValuesParser::new(T::names()).try_map(|name| T::try_from(name.as_str()))
}

impl Cli {
    pub async fn run(self, out: &mut impl Write) -> anyhow::Result<()> {
        let Some(command) = self.command else {
            info!("no subcommand given, printing help");
            let help = Cli::command().render_help().to_string();
            write!(out, "{help}")?;
            if !help.ends_with('\n') {
                writeln!(out)?;
            }
            return Ok(());
        };

        let config = Config::default().with_provider(self.provider);
        let format = self.output;
        debug!(?command, ?format, "dispatching");

        match command {
            Command::Arithmetic { operation, a, b } => {
                let calculation = arithmetic::calculate(operation, a, b)?;
                output::emit(out, format, &calculation)?;
            }
            Command::Todo { action, item } => {
                let outcome = todo::handle(TodoCommand::new(action, item)?);
                output::emit(out, format, &outcome)?;
            }
            Command::Weather { city } => {
                let provider = default_provider_from_config(&config);
                let report = provider.get_weather(&WeatherRequest::new(city)).await?;
                output::emit(out, format, &report)?;
            }
            Command::Contact { action, name, phone, email } => {
                let outcome = contact::handle(ContactCommand::new(action, name, phone, email)?);
                output::emit(out, format, &outcome)?;
            }
            Command::Convert { quantity, value, from_unit, to_unit } => {
                let conversion = convert::convert(quantity, value, &from_unit, &to_unit);
                output::emit(out, format, &conversion)?;
            }
        }

        Ok(())
    }
}
