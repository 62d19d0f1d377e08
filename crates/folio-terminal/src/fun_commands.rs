//! Decorative commands: matrix, fortune.

use folio_platform::RandomSource;
use folio_types::error::Result;

use crate::interpreter::{Category, Command, CommandResult, Environment, ResultKind};
use crate::parser::Invocation;

// ---------------------------------------------------------------------------
// matrix
// ---------------------------------------------------------------------------

const MATRIX_ROWS: usize = 10;
const MATRIX_COLS: usize = 50;
const MATRIX_CHARS: &str = "ｱｲｳｴｵｶｷｸｹｺｻｼｽｾｿﾀﾁﾂﾃﾄﾅﾆﾇﾈﾉﾊﾋﾌﾍﾎﾏﾐﾑﾒﾓﾔﾕﾖﾗﾘﾙﾚﾛﾜﾝ";

struct MatrixCmd;
impl Command for MatrixCmd {
    fn name(&self) -> &str {
        "matrix"
    }
    fn description(&self) -> &str {
        "Enter the Matrix"
    }
    fn usage(&self) -> &str {
        "matrix"
    }
    fn category(&self) -> Category {
        Category::Fun
    }
    fn execute(&self, _inv: &Invocation, env: &mut Environment<'_>) -> Result<CommandResult> {
        let glyphs: Vec<char> = MATRIX_CHARS.chars().collect();
        let mut output = vec![
            "Wake up, Neo...".to_string(),
            "The Matrix has you...".to_string(),
            String::new(),
        ];
        for _ in 0..MATRIX_ROWS {
            let row: String = (0..MATRIX_COLS)
                .map(|_| glyphs[env.random.pick_index(glyphs.len())])
                .collect();
            output.push(row);
        }
        output.push(String::new());
        output.push("Follow the white rabbit. 🐇".to_string());

        Ok(CommandResult {
            output,
            kind: ResultKind::Info,
            animate: true,
            ..Default::default()
        })
    }
}

// ---------------------------------------------------------------------------
// fortune
// ---------------------------------------------------------------------------

struct FortuneCmd;
impl Command for FortuneCmd {
    fn name(&self) -> &str {
        "fortune"
    }
    fn description(&self) -> &str {
        "Get your fortune"
    }
    fn usage(&self) -> &str {
        "fortune"
    }
    fn category(&self) -> Category {
        Category::Fun
    }
    fn execute(&self, _inv: &Invocation, env: &mut Environment<'_>) -> Result<CommandResult> {
        let pool = &env.profile.fortunes;
        let pick = if pool.is_empty() {
            "The future is unwritten.".to_string()
        } else {
            pool[env.random.pick_index(pool.len())].clone()
        };
        Ok(CommandResult {
            output: vec!["🔮 Your fortune:".to_string(), String::new(), pick],
            kind: ResultKind::Info,
            ..Default::default()
        })
    }
}

/// Register decorative commands.
pub fn register_fun_commands(reg: &mut crate::CommandRegistry) {
    reg.register(Box::new(MatrixCmd));
    reg.register(Box::new(FortuneCmd));
}
