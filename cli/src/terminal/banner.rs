use colored::*;

use crate::terminal::print;

const BANNER: &str = r#"
              ____   ___   _      ___  ____
             / ___| / _ \ | |    |_ _||  _ \
             \___ \| | | || |     | | | | | |
              ___) | |_| || |___  | | | |_| |
             |____/ \___/ |_____||___||____/
"#;

pub fn print() {
    print::emit(&BANNER.bright_cyan().bold().to_string());
}
