//! Built-in command registration.

use crate::action_commands::register_action_commands;
use crate::fun_commands::register_fun_commands;
use crate::interpreter::CommandRegistry;
use crate::nav_commands::register_nav_commands;
use crate::terminal_commands::register_terminal_commands;

/// Register the full built-in catalogue into a registry.
///
/// The catalogue is a closed set; `help` is synthesized by the registry
/// itself and needs no registration.
pub fn register_builtins(reg: &mut CommandRegistry) {
    register_nav_commands(reg);
    register_action_commands(reg);
    register_terminal_commands(reg);
    register_fun_commands(reg);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_catalogue_is_registered() {
        let mut reg = CommandRegistry::new();
        register_builtins(&mut reg);
        for name in [
            "help", "about", "skills", "projects", "hire", "matrix", "clear", "history",
            "resume", "github", "linkedin", "email", "fortune",
        ] {
            assert!(reg.contains(name), "missing command: {name}");
        }
        // Closed set: the catalogue plus nothing else.
        assert_eq!(reg.names().len(), 13);
    }
}
