use super::*;

#[test]
fn cached_flag_defaults_off_and_is_accepted_by_both_subcommands() {
    let args = Args::try_parse_from(["declgrep", "fun", "main.cpp", "foo"]).expect("args parse");
    assert!(!args.cached);

    let args = Args::try_parse_from(["declgrep", "--cached", "fun", "main.cpp", "foo"])
        .expect("args parse");
    assert!(args.cached);
    assert!(matches!(args.command, Command::Fun { .. }));

    let args = Args::try_parse_from(["declgrep", "--cached", "cls", "main.cpp", "Foo"])
        .expect("args parse");
    assert!(args.cached);
    assert!(matches!(args.command, Command::Cls { .. }));
}

#[test]
fn compiler_override_and_json_are_parsed() {
    let args = Args::try_parse_from([
        "declgrep",
        "--compiler",
        "clang++-19",
        "--json",
        "cls",
        "main.cpp",
        "Widget",
    ])
    .expect("args parse");
    assert_eq!(args.compiler, "clang++-19");
    assert!(args.json);
}
