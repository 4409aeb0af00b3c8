use schema_args::Args;

fn main() {
    let args = Args::parse("verbose,name*");
    let name = args.get_string("name").unwrap_or_default();
    println!("Hello, {name}!");

    if args.get_boolean("verbose") == Some(true) {
        println!("(verbose mode)");
    }
}
