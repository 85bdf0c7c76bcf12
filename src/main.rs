use std::{
    fs::File,
    io::{self, BufRead, Write},
    process::ExitCode,
};

use growarr_common::prelude::*;
use growarr_logging::{log_error, log_info, log_warning, get_logger, set_logger, LogCategory, Logger};

pub const LOG_CAT : LogCategory = LogCategory::new("Main");

const LOG_FILE: &str = "growarr.log";

const INITIAL_NAME_LEN: usize = 1;
const DEFAULT_VALUE: char = 'D';
const FILL_VALUE: char = '-';

static LOGGER: Logger = Logger::new();

fn main() -> ExitCode {
    set_logger(&LOGGER);
    let logger = get_logger();
    // Standard output belongs to the walkthrough
    logger.set_log_to_console(false);

    match File::create(LOG_FILE) {
        Ok(file) => {
            _ = logger.add_writer(Box::new(file));
        },
        Err(err) => eprintln!("Failed to create '{LOG_FILE}': {err}"),
    }

    let exit_code = match read_name() {
        Ok(name) if name.is_empty() => {
            log_warning!(LOG_CAT, "No name was entered");
            eprintln!("a name of at least one character is required");
            ExitCode::FAILURE
        },
        Ok(name) => {
            let name = name.chars().collect::<Vec<_>>();
            log_info!(LOG_CAT, "Running the walkthrough for a name of {} characters", name.len());
            report(walkthrough(&name))
        },
        Err(err) => {
            log_error!(LOG_CAT, main, "Failed to read the name: {err}");
            eprintln!("failed to read from stdin: {err}");
            ExitCode::FAILURE
        },
    };

    logger.flush();
    exit_code
}

fn read_name() -> io::Result<String> {
    print!("please enter your name..: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(&['\r', '\n'][..]).to_string())
}

fn report(result: Result<(), ArrayError>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        // The reversed print ends with an out of range lookup
        Err(ArrayError::OutOfRange(err)) => {
            _ = io::stdout().flush();
            eprintln!("\nindex {} out of range", err.index as isize);
            log_info!(LOG_CAT, "Walkthrough ended with the expected error: {err}");
            ExitCode::SUCCESS
        },
        Err(ArrayError::Reserve(err)) => {
            _ = io::stdout().flush();
            eprintln!("new failed");
            log_error!(LOG_CAT, report, "Walkthrough failed to allocate: {err}");
            ExitCode::FAILURE
        },
    }
}

fn set_name(arr: &mut DynamicArray<char>, name: &[char]) -> Result<(), TryReserveError> {
    for (idx, &c) in name.iter().enumerate() {
        arr.try_set(c, idx)?;
    }
    Ok(())
}

/// Reverse a name while exercising copying, assignment, equality and the bounds-checked lookup of `DynamicArray`.
fn walkthrough(name: &[char]) -> Result<(), ArrayError> {
    let mut a1 = DynamicArray::try_from_elem(INITIAL_NAME_LEN, DEFAULT_VALUE)?;
    assert_eq!(a1.len(), INITIAL_NAME_LEN);

    println!("size is {}", a1.len());
    println!("read in: {}", name.len());

    // The first write past the end grows the array
    set_name(&mut a1, name)?;
    assert_eq!(a1.len(), name.len());

    println!("size is {}", a1.len());
    print!("your name is..: ");
    for idx in 0..a1.len() {
        print!("{}", a1[idx]);
    }

    print!("\nyour name is..: ");
    let mut it = a1.begin();
    while it != a1.end() {
        print!("{}", *it.post_increment());
    }
    println!();

    let mut a2 = a1.try_clone()?;
    let mut a3 = DynamicArray::try_from_elem(a1.len() + a2.len(), FILL_VALUE)?;

    a1.try_assign(&a2)?;
    assert_eq!(a1.len(), a2.len());
    assert!(a1 == a2);
    assert!(!(a1 != a2));

    a2.try_assign(&a3)?;
    assert_ne!(a1.len(), a2.len());
    assert!(a1 != a2);

    // `a3 = a3`: a mutable and a shared borrow can't alias, so assign from a snapshot
    let snapshot = a3.try_clone()?;
    a3.try_assign(&snapshot)?;
    assert!(a3 == snapshot);

    // Catches an assignment that copies one element too few
    let mut a4 = DynamicArray::<char>::try_new(name.len())?;
    set_name(&mut a4, name)?;

    let mut a5 = DynamicArray::try_from_elem(INITIAL_NAME_LEN, DEFAULT_VALUE)?;
    a5.try_assign(&a4)?;
    assert!(a4 == a5);

    let last = &mut a4[name.len() - 1];
    *last = if *last == 'x' { 'y' } else { 'x' };
    assert!(!(a4 == a5));

    print!("your name backwards is..: ");
    // Off by one: the final lookup is at index -1
    for idx in (0..=name.len()).rev() {
        let c = a1.get(idx.wrapping_sub(1))?;
        print!("{c}");
    }
    println!();

    Ok(())
}
