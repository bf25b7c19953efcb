// Load a json file that describes the newton fractal we are going to make
// and write out one png per requested render

use std::io::{Error, Read, ErrorKind};
use std::fs::{File, create_dir_all};
use std::env;
use std::path::Path;

use image::RgbImage;
use log::info;

mod newton_raphson;

fn make_directory_for_image(path_str : &str) -> std::io::Result<()> {
    let path = Path::new(path_str);
    if let Some(dir) = path.parent() {
        create_dir_all(dir)
    } else {
        Ok(())
    }
}

fn save_image(image : &RgbImage, out_filename : &str) -> std::io::Result<()> {
    info!("Writing output to {}", out_filename);
    make_directory_for_image(out_filename)?;
    image.save(out_filename).map_err(
        |e| Error::new(ErrorKind::InvalidData, format!("Couldn't write image: {}", e))
    )
}

fn main() -> std::io::Result<()> {
    env_logger::init();
    // Get file to use else default
    let in_filename = env::args().nth(1).unwrap_or("input.json".to_string());
    let out_filename = env::args().nth(2).unwrap_or("output.png".to_string());
    info!("Loading input file: {}", in_filename);
    let mut file = File::open(in_filename)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    info!("Parsing input file");
    let input = json::parse(&contents).map_err(
        |_| Error::new(ErrorKind::InvalidData, "Couldn't parse input")
    )?;
    let images = newton_raphson::generate(&input)?;
    if images.len() == 1 {
        save_image(&images[0], &out_filename)?;
    } else {
        // Several renders go into a directory named after the output
        let out_filename_base = out_filename.strip_suffix(".png").unwrap_or(&out_filename);
        for (i, image) in images.iter().enumerate() {
            info!("Render {} of {}", i+1, images.len());
            save_image(image, &format!("{}/{}.png", out_filename_base, i))?;
        }
    }
    Ok(())
}
