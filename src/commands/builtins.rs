//! Commands that ship with the tool itself.

use super::command::PlainCommand;
use super::generate::{Blueprint, GenerateCommand};
use super::registry::CommandRegistry;
use super::types::{
    Alias, AvailableOption, CommandDescriptor, ModuleRef, OptionDefault, OptionType, WorksScope,
};

/// Built-in blueprints for `generate`.
pub fn builtin_blueprints() -> Vec<Blueprint> {
    vec![
        Blueprint::new("component", "Generates a component.").with_option(
            AvailableOption::new("path", OptionType::String)
                .with_default("components")
                .with_aliases(&["dir"]),
        ),
        Blueprint::new("route", "Generates a route and a template."),
        Blueprint::new("model", "Generates a model."),
        Blueprint::new("service", "Generates a service."),
        Blueprint::new("helper", "Generates a helper function."),
    ]
}

fn build_descriptor() -> CommandDescriptor {
    let mut output_path = AvailableOption::new("output-path", OptionType::Module(ModuleRef::path()))
        .with_aliases(&["o"])
        .with_description("Directory the build is written to");
    output_path.default = Some(OptionDefault::Value("dist/".into()));

    CommandDescriptor::new("build", "Builds your app and places it into the output path.")
        .with_aliases(["b"])
        .works(WorksScope::InsideProject)
        .with_option(
            AvailableOption::new("environment", OptionType::String)
                .with_default("development")
                .with_aliases(&["e", "dev", "prod"]),
        )
        .with_option(output_path)
        .with_option(AvailableOption::new("watch", OptionType::Boolean).with_default(false).with_aliases(&["w"]))
}

fn generate_descriptor() -> CommandDescriptor {
    CommandDescriptor::new("generate", "Generates new code from blueprints.")
        .with_aliases(["g"])
        .works(WorksScope::InsideProject)
        .with_anonymous("<blueprint>")
        .with_option(AvailableOption::new("dry-run", OptionType::Boolean).with_default(false).with_aliases(&["d"]))
        .with_option(AvailableOption::new("verbose", OptionType::Boolean).with_default(false).with_aliases(&["v"]))
        .with_option(AvailableOption::new("pod", OptionType::Boolean).with_default(false).with_aliases(&["p"]))
}

/// Descriptor of the `help` command.
pub fn help_descriptor() -> CommandDescriptor {
    CommandDescriptor::new(
        "help",
        "Outputs the usage instructions for all commands or the provided command",
    )
    .with_aliases([Alias::Bare, "h".into(), "--help".into(), "-h".into()])
    .with_option(
        AvailableOption::new("verbose", OptionType::Boolean)
            .with_default(false)
            .with_aliases(&["v"])
            .with_description("Include option descriptions and command scopes"),
    )
    .with_option(
        AvailableOption::new("json", OptionType::Boolean)
            .with_default(false)
            .with_description("Print one JSON document instead of text"),
    )
    .with_anonymous("<command-name (Default: all)>")
}

/// Primary registry: the tool's own commands in listing order.
pub fn builtin_registry() -> CommandRegistry {
    let mut registry = CommandRegistry::new();

    registry.register(PlainCommand::new(
        CommandDescriptor::new("new", "Creates a new directory and runs init in it.")
            .works(WorksScope::OutsideProject)
            .with_anonymous("<app-name>")
            .with_option(AvailableOption::new("dry-run", OptionType::Boolean).with_default(false).with_aliases(&["d"]))
            .with_option(AvailableOption::new("skip-git", OptionType::Boolean).with_default(false).with_aliases(&["sg"])),
    ));
    registry.register(PlainCommand::new(
        CommandDescriptor::new("init", "Creates a new project in the current folder.")
            .works(WorksScope::Everywhere)
            .with_anonymous("<glob-pattern>")
            .with_option(AvailableOption::new("dry-run", OptionType::Boolean).with_default(false).with_aliases(&["d"])),
    ));
    registry.register(PlainCommand::new(build_descriptor()));
    registry.register(PlainCommand::new(
        CommandDescriptor::new("serve", "Builds and serves your app, rebuilding on file changes.")
            .with_aliases(["server", "s"])
            .works(WorksScope::InsideProject)
            .with_option(AvailableOption::new("port", OptionType::Number).with_default(4200).with_aliases(&["p"]))
            .with_option(AvailableOption::new("host", OptionType::String).with_aliases(&["H"])),
    ));
    registry.register(PlainCommand::new(
        CommandDescriptor::new("test", "Runs your app's test suite.")
            .with_aliases(["t"])
            .works(WorksScope::InsideProject)
            .with_option(AvailableOption::new("filter", OptionType::String).with_aliases(&["f"]))
            .with_option(AvailableOption::new("server", OptionType::Boolean).with_default(false).with_aliases(&["s"])),
    ));
    registry.register(GenerateCommand::new(generate_descriptor(), builtin_blueprints()));
    registry.register(PlainCommand::new(
        CommandDescriptor::new("destroy", "Destroys code generated by `generate` command.")
            .with_aliases(["d"])
            .works(WorksScope::InsideProject)
            .with_anonymous("<blueprint>")
            .with_option(AvailableOption::new("dry-run", OptionType::Boolean).with_default(false).with_aliases(&["d"])),
    ));
    registry.register(PlainCommand::new(
        CommandDescriptor::new("install", "Installs an addon or package.")
            .works(WorksScope::InsideProject)
            .with_anonymous("<addon-name>"),
    ));
    registry.register(PlainCommand::new(help_descriptor()));
    registry.register(PlainCommand::new(
        CommandDescriptor::new("version", "outputs version number")
            .with_aliases(["v", "--version", "-v"])
            .with_option(AvailableOption::new("verbose", OptionType::Boolean).with_default(false)),
    ));

    registry
}
