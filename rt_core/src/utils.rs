use colour::red;

pub fn print_intro() {
    println!(
        r#"
          __
   _____ / /_
  / ___// __/
 / /   / /_
/_/    \__/    sphere ray tracer"#
    );

    if cfg!(debug_assertions) {
        red!("\nWARNING: YOU ARE RUNNING IN DEBUG MODE. Keep in mind that everything is way slower than it should be.\n\n");
    }
}
