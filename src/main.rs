use std::env;
use std::process;

fn main() {
  env_logger::init();

  let args: Vec<String> = env::args().collect();
  if args.len() != 2 {
    let program = args.first().map(String::as_str).unwrap_or("tenpin");
    println!("usage: {program} <game-file>");
    process::exit(1);
  }

  match tenpin::score_game_file(&args[1]) {
    Ok(score) => println!("{score}"),
    Err(err) => {
      eprintln!("{err}");
      process::exit(1);
    }
  }
}
