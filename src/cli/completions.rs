use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    routepack completions bash > ~/.bash_completion.d/routepack\n\n\
                  Generate zsh completions:\n    routepack completions zsh > ~/.zfunc/_routepack\n\n\
                  Generate fish completions:\n    routepack completions fish > ~/.config/fish/completions/routepack.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
