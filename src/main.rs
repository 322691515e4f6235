use std::{env, fs::read_to_string, path::PathBuf, process};

use tarn::{
    ast::stmts::StmtVisitor, errors::errors::ConsoleQueue, lexer::lexer::Lexer,
    parser::parser::Parser, view::stmt_view::StmtView,
};

const MAX_ERRORS: usize = 20;

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        eprintln!("[ERROR]: Invalid number of args.");
        process::exit(1);
    }

    let path = PathBuf::from(&args[1]);
    if path.extension().and_then(|ext| ext.to_str()) != Some("tn") {
        eprintln!("[ERROR]: Invalid file extension.");
        process::exit(1);
    }

    let code = match read_to_string(&path) {
        Ok(code) => code,
        Err(error) => {
            eprintln!("[ERROR]: Failed to read {}: {}", path.display(), error);
            process::exit(1);
        }
    };

    let mut equeue = ConsoleQueue::new(MAX_ERRORS);

    let tokens = {
        let mut lexer = Lexer::new(&mut equeue, &code);
        lexer.scan_all()
    };
    if !equeue.is_empty() {
        process::exit(1);
    }

    println!("===   Lexemes   ===");
    for token in &tokens {
        println!("{}", token);
    }

    let statements = {
        let mut parser = Parser::new(&mut equeue, &tokens);
        parser.parse()
    };
    if !equeue.is_empty() {
        process::exit(1);
    }

    println!("\n=== Syntax Tree ===");
    for stmt in &statements {
        println!("{}", StmtView.visit_stmt(stmt, 0));
    }
}
