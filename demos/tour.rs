//! A walk through the vocabulary. Run with `RUST_LOG=readable_regex_rs=debug`
//! to see each pattern being compiled.

use readable_regex_rs::{Fragment, ReadableRegexResult};
use tracing_subscriber::EnvFilter;

fn section(title: &str) {
    println!("\n{}\n  {title}\n{}\n", "=".repeat(60), "=".repeat(60));
}

fn main() -> ReadableRegexResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let regex = Fragment::new();

    section("1. Email pattern with plurals");
    let email = regex.words().then("@").words().then(".").words();
    println!("Pattern: {email}");
    for addr in ["user@example.com", "bad@@address", "hello@world.org"] {
        println!("  {addr:<25} -> {}", email.test(addr)?);
    }

    section("2. Phone number with fixed widths");
    let phone = regex
        .digit()
        .exactly(3)?
        .then("-")
        .digit()
        .exactly(3)?
        .then("-")
        .digit()
        .exactly(4)?;
    println!("Pattern: {phone}");
    for num in ["123-456-7890", "12-34-5678", "abc-def-ghij"] {
        println!("  {num:<20} -> {}", phone.test(num)?);
    }

    section("3. IP address with between(1, 3)");
    let octet = regex.digit().between(1, 3)?;
    let ip = octet
        .then(".")
        .capture(&octet)
        .then(".")
        .capture(&octet)
        .then(".")
        .capture(&octet);
    println!("Pattern: {ip}");
    for addr in ["192.168.1.1", "10.0.0.255", "not.an.ip"] {
        println!("  {addr:<25} -> {}", ip.test(addr)?);
    }

    section("4. Extract numbers");
    let text = "Order #42 has 3 items totaling $129";
    println!("Pattern: {}", regex.digits());
    println!("Found:   {:?}", regex.digits().find_all(text)?);

    section("5. Capturing groups");
    let kv = regex
        .capture(&regex.words())
        .then("=")
        .capture(&regex.any_chars());
    println!("Pattern: {kv}");
    if let Some(caps) = kv.search("color=blue")? {
        println!("  Key:   {}", &caps[1]);
        println!("  Value: {}", &caps[2]);
    }

    section("6. Case-insensitive matching");
    let greeting = regex.starts_with("hello").ignore_case();
    println!("Pattern: {greeting}  (ignore case)");
    for t in ["hello world", "HELLO WORLD", "Hello World", "hey there"] {
        println!("  {t:<20} -> {}", greeting.test(t)?);
    }

    section("7. Search and replace");
    let text = "My SSN is 123-45-6789 and PIN is 9876";
    println!("Original: {text}");
    println!("Censored: {}", regex.digits().replace(text, "***")?);

    section("8. Splitting text");
    let separator = regex.then(",").whitespace().zero_or_more()?;
    println!("Parts: {:?}", separator.split("apple, banana,cherry, date")?);

    section("9. Negated classes");
    let non_digits = regex.exclude().digits();
    println!("Pattern: {non_digits}");
    println!("Non-digit runs in 'a1b2c3': {:?}", non_digits.find_all("a1b2c3")?);
    let plain = regex.words().excluding("_")?;
    println!("Pattern: {plain}");
    println!("Words in 'snake_case_name': {:?}", plain.find_all("snake_case_name")?);

    section("10. Immutable builder, safe reuse");
    let base = regex.starts_with("LOG-");
    let error_log = base.then("ERROR").any_chars();
    let warn_log = base.then("WARN").any_chars();
    println!("Base:  {base}");
    println!("Error: {error_log}");
    println!("Warn:  {warn_log}");
    for line in ["LOG-ERROR disk full", "LOG-WARN low memory", "LOG-INFO started"] {
        println!(
            "  {line:<30}  error={}  warn={}",
            error_log.test(line)?,
            warn_log.test(line)?
        );
    }

    Ok(())
}
