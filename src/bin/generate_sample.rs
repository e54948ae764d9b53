use serde::Serialize;

/// One row of the generated spice table. Field renames match the column
/// headers the mixer expects.
#[derive(Serialize)]
struct SpiceRow {
    #[serde(rename = "Spice Name")]
    name: &'static str,
    #[serde(rename = "Sweetness")]
    sweetness: f64,
    #[serde(rename = "Sourness")]
    sourness: f64,
    #[serde(rename = "Saltiness")]
    saltiness: f64,
    #[serde(rename = "Spiciness")]
    spiciness: f64,
    #[serde(rename = "Bitterness")]
    bitterness: f64,
    #[serde(rename = "Umami")]
    umami: f64,
}

fn main() {
    // name, then sweetness, sourness, saltiness, spiciness, bitterness, umami
    let spices: [(&str, [f64; 6]); 20] = [
        ("Cinnamon", [80.0, 10.0, 20.0, 50.0, 5.0, 30.0]),
        ("Sumac", [20.0, 70.0, 10.0, 30.0, 40.0, 10.0]),
        ("Cumin", [10.0, 15.0, 20.0, 45.0, 55.0, 60.0]),
        ("Paprika", [55.0, 10.0, 15.0, 25.0, 20.0, 40.0]),
        ("Smoked Paprika", [45.0, 10.0, 25.0, 35.0, 30.0, 50.0]),
        ("Clove", [35.0, 5.0, 5.0, 70.0, 45.0, 15.0]),
        ("Nutmeg", [60.0, 5.0, 5.0, 40.0, 30.0, 10.0]),
        ("Ginger", [40.0, 30.0, 5.0, 65.0, 15.0, 10.0]),
        ("Black Pepper", [5.0, 10.0, 15.0, 75.0, 35.0, 25.0]),
        ("Cayenne", [10.0, 15.0, 10.0, 95.0, 25.0, 20.0]),
        ("Turmeric", [15.0, 10.0, 10.0, 30.0, 60.0, 35.0]),
        ("Coriander Seed", [45.0, 35.0, 5.0, 15.0, 20.0, 15.0]),
        ("Fennel Seed", [65.0, 10.0, 5.0, 20.0, 25.0, 10.0]),
        ("Star Anise", [75.0, 5.0, 5.0, 35.0, 20.0, 10.0]),
        ("Cardamom", [55.0, 25.0, 5.0, 40.0, 30.0, 10.0]),
        ("Saffron", [40.0, 10.0, 10.0, 15.0, 45.0, 30.0]),
        ("Garlic Powder", [20.0, 10.0, 25.0, 35.0, 20.0, 80.0]),
        ("Onion Powder", [35.0, 15.0, 20.0, 20.0, 15.0, 70.0]),
        ("Mustard Seed", [10.0, 25.0, 10.0, 70.0, 50.0, 20.0]),
        ("Sichuan Peppercorn", [15.0, 30.0, 10.0, 85.0, 30.0, 20.0]),
    ];

    let output_path = "spice_flavor_profile.csv";
    let mut writer = csv::Writer::from_path(output_path).expect("Failed to create output file");

    for &(name, [sweetness, sourness, saltiness, spiciness, bitterness, umami]) in &spices {
        writer
            .serialize(SpiceRow {
                name,
                sweetness,
                sourness,
                saltiness,
                spiciness,
                bitterness,
                umami,
            })
            .expect("Failed to write record");
    }
    writer.flush().expect("Failed to flush writer");

    println!("Wrote {} spices to {output_path}", spices.len());
}
