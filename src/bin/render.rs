use svg_raster::Svg;

fn main() {
    env_logger::init();
    let mut args = std::env::args().skip(1);
    let (input, output) = match (args.next(), args.next()) {
        (Some(input), Some(output)) => (input, output),
        _ => {
            println!("usage: render input.svg output.png");
            return;
        }
    };

    let data = match std::fs::read(&input) {
        Ok(data) => data,
        Err(e) => {
            println!("error reading {}: {}", input, e);
            return;
        }
    };
    let svg = match Svg::from_data(&data) {
        Ok(svg) => svg,
        Err(e) => {
            println!("error parsing {}: {}", input, e);
            return;
        }
    };

    let surface = svg.render();
    match surface.save(&output) {
        Ok(()) => println!("wrote {}", output),
        Err(e) => println!("error writing {}: {}", output, e),
    }
}
