use geohash_bits::{Bounds, GeoHashError, decode, encode, get_neighbors};

fn main() -> Result<(), GeoHashError> {
    let bounds = Bounds::MERCATOR;

    let code = encode(&bounds.latitude, &bounds.longitude, 0.0, 0.0, 30)?;
    println!("Code: {} (step {})", code.bits(), code.step());

    let area = decode(&bounds.latitude, &bounds.longitude, &code);
    println!("Latitude: {:.10} {:.10}", area.latitude.min, area.latitude.max);
    println!("Longitude: {:.10} {:.10}", area.longitude.min, area.longitude.max);

    for (direction, neighbor) in get_neighbors(&code).iter() {
        println!("{}: {}", direction, neighbor.bits());
    }

    Ok(())
}
