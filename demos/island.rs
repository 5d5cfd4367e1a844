use terrain_pathfinding::{Coord, Map};

// A jagged island: rows have different lengths and the search backtracks out of
// several dead ends before it reaches the end. Start and end can be given on the
// command line as "(row,col)".

fn main() {
    let grid = vec![
        vec!["ocean", "grass", "grass", "grass"],
        vec!["grass", "grass", "grass", "grass", "grass"],
        vec!["grass", "grass", "grass", "ocean", "grass"],
        vec!["grass", "ocean", "grass", "ocean", "grass", "grass"],
        vec!["ocean", "grass", "grass", "grass", "grass"],
        vec!["grass", "grass", "ocean", "grass"],
    ];
    let mut args = std::env::args().skip(1);
    let start: Coord = args
        .next()
        .unwrap_or_else(|| "(1,0)".to_owned())
        .parse()
        .unwrap();
    let end: Coord = args
        .next()
        .unwrap_or_else(|| "(1,4)".to_owned())
        .parse()
        .unwrap();
    let map = match Map::from_labels(grid, (start.row, start.col), (end.row, end.col)) {
        Ok(map) => map,
        Err(err) => {
            eprintln!("{}", err);
            return;
        }
    };
    println!("{}", map);
    let search = map.search();
    println!("Visited {} cells", search.visited_count());
    match search.path() {
        Some(path) => println!("Path: {}", path),
        None => println!("No path from {} to {}", map.start(), map.end()),
    }
}
