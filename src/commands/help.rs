pub fn print_help() {
    println!("Walktime - type a time the way you would say it");
    println!("\nUsage:");
    println!("  1. Shell: type a time at the prompt and press enter");
    println!("  2. Command Mode: walktime <command> [options]");

    println!("\nExamples:");
    println!("  8:30          => 08:30");
    println!("  1742          => 17:42");
    println!("  12:30am       => 00:30");
    println!("  1:30 p .m.    => 13:30");
    println!("  13:01:05      => 13:01:05");

    println!("\nCommands:");
    println!("  walktime parse <time>...       Parse times given as arguments");
    println!("  walktime check [file]          Check one time per line (stdin if no file)");
    println!("  walktime config show           Show current settings");
    println!("  walktime config path           Print the config file location");
    println!("  walktime config init           Write the default config file");

    println!("\nShell Commands:");
    println!("  help                           Show this help");
    println!("  format 12h|24h                 Switch the output clock format");
    println!("  exit, quit                     Leave the shell");
}
