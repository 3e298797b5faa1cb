use layout2xml::reader::read_action_map;
use layout2xml::{ActionInput, ActionType};
use std::collections::HashMap;

// argv may be empty when the process is spawned without a name
fn program_name(args: &[String]) -> &str {
    args.first().map_or("actions_dump", String::as_str)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <keyboard_actions.xml>", program_name(&args));
        std::process::exit(1);
    }

    let content = std::fs::read_to_string(&args[1])?;
    let records = match read_action_map(&content) {
        Ok(records) => records,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let mut per_type: HashMap<ActionType, usize> = HashMap::new();
    let mut gestures: HashMap<String, usize> = HashMap::new();

    for (index, record) in records.iter().enumerate() {
        *per_type.entry(record.action_type).or_default() += 1;
        *gestures.entry(record.movement.to_string()).or_default() += 1;

        let input = match &record.input {
            ActionInput::Key(key) => key.clone(),
            ActionInput::Text { input_string, caps_lock_string: Some(caps) } => {
                format!("{:?} / {:?}", input_string, caps)
            }
            ActionInput::Text { input_string, caps_lock_string: None } => format!("{:?}", input_string),
        };

        println!("{:4}  {:<13}  {:<60}  {}", index, record.action_type.to_string(), record.movement.to_string(), input);
    }

    println!("\n=== SUMMARY ===");
    println!("Actions: {}", records.len());
    for action_type in [ActionType::InputText, ActionType::InputKey, ActionType::InputSpecial] {
        println!("  {}: {}", action_type, per_type.get(&action_type).copied().unwrap_or(0));
    }

    let mut repeated: Vec<_> = gestures.into_iter().filter(|(_, count)| *count > 1).collect();
    repeated.sort();
    if repeated.is_empty() {
        println!("All gestures are unique");
    } else {
        println!("Repeated gestures:");
        for (gesture, count) in repeated {
            println!("  {} x{}", gesture, count);
        }
    }

    Ok(())
}
