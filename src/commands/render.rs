//! Line-mode help rendering.

use std::sync::Arc;

use tracing::debug;

use super::addons::{AddonSource, merge_addon_commands};
use super::command::{Command, HelpOptions, RootCommand};
use super::error::Result;
use super::registry::CommandRegistry;
use super::ui::Ui;

/// Tokens that name a whole family of commands, e.g. `generate`.
pub const DEFAULT_MULTI_COMMAND_ALIASES: &[&str] = &["g", "generate"];

/// Renders help for the primary registry and any addon command sets.
pub struct HelpRenderer<'a> {
    pub(super) program: &'a str,
    pub(super) commands: &'a CommandRegistry,
    pub(super) addons: Option<&'a dyn AddonSource>,
    pub(super) multi_command_aliases: Vec<String>,
}

/// What a list of requested names turns into once multi-command aliases are
/// taken into account.
pub(super) struct Request<'r> {
    pub names: &'r [String],
    pub options: HelpOptions,
}

impl<'a> HelpRenderer<'a> {
    pub fn new(program: &'a str, commands: &'a CommandRegistry) -> Self {
        Self {
            program,
            commands,
            addons: None,
            multi_command_aliases: DEFAULT_MULTI_COMMAND_ALIASES
                .iter()
                .map(|alias| alias.to_string())
                .collect(),
        }
    }

    pub fn with_addons(mut self, addons: &'a dyn AddonSource) -> Self {
        self.addons = Some(addons);
        self
    }

    pub fn with_multi_command_aliases(mut self, aliases: Vec<String>) -> Self {
        self.multi_command_aliases = aliases;
        self
    }

    pub fn root(&self) -> RootCommand {
        RootCommand::new(self.program)
    }

    /// Render help as lines, or as one JSON document when `options.json`.
    pub fn run(&self, ui: &mut dyn Ui, options: &HelpOptions, requested: &[String]) -> Result<()> {
        if options.json {
            let document = self.build_document(options, requested)?;
            ui.write_line(&document.to_pretty_json()?)?;
            Ok(())
        } else {
            self.render_all(ui, options, requested)
        }
    }

    /// Line mode. Without requested names the whole registry is listed,
    /// followed by one group per addon; otherwise each name gets detailed
    /// help.
    pub fn render_all(
        &self,
        ui: &mut dyn Ui,
        options: &HelpOptions,
        requested: &[String],
    ) -> Result<()> {
        if requested.is_empty() {
            return self.render_listing(ui, options);
        }

        ui.write_line(&format!("Requested {} commands:", self.program))?;
        ui.write_line("")?;

        let commands = self.lookup_registry()?;
        let request = self.split_request(options, requested);
        for name in request.names {
            let command = commands.resolve(name)?;
            self.print_help_for_command(ui, command, true, &request.options)?;
        }
        Ok(())
    }

    fn render_listing(&self, ui: &mut dyn Ui, options: &HelpOptions) -> Result<()> {
        let root = self.root();
        ui.write_line(&root.basic_help(self.program, options))?;
        ui.write_line(&format!("Available commands in {}:", self.program))?;
        ui.write_line("")?;

        for command in self.commands.iter() {
            self.print_help_for_command(ui, command, false, options)?;
        }

        if let Some(addons) = self.addons {
            addons.each_addon_command(&mut |addon_name, commands| {
                debug!(addon = addon_name, "listing addon commands");
                ui.write_line("")?;
                ui.write_line(&format!("Available commands from {}:", addon_name))?;
                for command in commands.iter() {
                    self.print_help_for_command(ui, command, false, options)?;
                }
                Ok(())
            })?;
        }
        Ok(())
    }

    /// Hidden commands are skipped unless detailed help was asked for.
    fn print_help_for_command(
        &self,
        ui: &mut dyn Ui,
        command: &Arc<dyn Command>,
        detailed: bool,
        options: &HelpOptions,
    ) -> Result<()> {
        if detailed {
            for line in command.detailed_help(self.program, options) {
                ui.write_line(&line)?;
            }
        } else if !command.descriptor().skip_help {
            ui.write_line(&command.basic_help(self.program, options))?;
        }
        Ok(())
    }

    /// Primary registry with all addon commands merged in, for lookups.
    pub(super) fn lookup_registry(&self) -> Result<CommandRegistry> {
        merge_addon_commands(self.commands, self.addons)
    }

    /// A leading multi-command alias swallows the rest of the tokens as raw
    /// arguments for that one command.
    pub(super) fn split_request<'r>(
        &self,
        options: &HelpOptions,
        requested: &'r [String],
    ) -> Request<'r> {
        let mut options = options.clone();
        match requested.split_first() {
            Some((first, rest)) if self.multi_command_aliases.contains(first) => {
                if !rest.is_empty() {
                    options.raw_args = rest.to_vec();
                }
                Request {
                    names: std::slice::from_ref(first),
                    options,
                }
            }
            _ => Request {
                names: requested,
                options,
            },
        }
    }
}
