// Offline tool producing the loader's point-set resource from a picture:
//
//     extract_points [input.png] [output.json]

use neuro_canvas_loader::point_set;
use neuro_canvas_loader::silhouette::{extract_points, SilhouetteOptions};
use std::env;
use std::error::Error;
use std::fs;

fn main() -> Result<(), Box<dyn Error>> {
    let mut args = env::args().skip(1);
    let input = args.next().unwrap_or_else(|| "image.png".to_owned());
    let output = args.next().unwrap_or_else(|| "face_points.json".to_owned());

    let image = image::open(&input)?;
    let points = extract_points(&image, &SilhouetteOptions::default());
    fs::write(&output, point_set::to_json(&points)?)?;

    println!("Wrote {} points to {}", points.len(), output);
    Ok(())
}
