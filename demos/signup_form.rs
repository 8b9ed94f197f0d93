use fieldguard::{FieldBuilder, Form, ValidationState};

fn describe(state: &ValidationState) -> String {
    match state {
        ValidationState::Idle => "idle".to_string(),
        ValidationState::Valid => "valid".to_string(),
        ValidationState::Locked => "locked".to_string(),
        ValidationState::NotValid(reason) => format!("not valid: {}", reason),
    }
}

fn main() {
    let mut form = Form::new();
    form.add_field(
        "email",
        FieldBuilder::new().not_empty().is_email().build(),
    );
    form.add_field("password", FieldBuilder::new().is_password().build());
    form.add_field("document", FieldBuilder::new().is_id_document().build());

    // First attempt: every field rejected
    for (name, value) in [
        ("email", "juan.example.com"),
        ("password", "hunter2"),
        ("document", "123"),
    ] {
        let state = form.set_value(name, value).expect("field is registered");
        println!("{:<10} {:<20} -> {}", name, value, describe(state));
    }
    println!("form valid: {}\n", form.is_valid());

    // Second attempt: corrected values
    for (name, value) in [
        ("email", "juan@example.com"),
        ("password", "s3cret!pass"),
        ("document", "x0123456"),
    ] {
        let state = form.set_value(name, value).expect("field is registered");
        println!("{:<10} {:<20} -> {}", name, value, describe(state));
    }
    println!("form valid: {}", form.is_valid());

    // The ID document field stores the normalized (uppercased) value
    println!(
        "document stored as: {}",
        form.field("document").expect("field is registered").value()
    );

    // Freeze the document field after submission; the next write unfreezes it
    let mut document = form.field("document").expect("field is registered").clone();
    document.lock();
    form.add_field("document", document);
    println!(
        "document after submit: {}",
        describe(form.state("document").expect("field is registered"))
    );
}
