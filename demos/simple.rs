use terrain_pathfinding::Map;

// In this example a path is found on a 3x3 grid with shape
//  ___
// |S  |
// | # |
// |  E|
//  ___
// where
// - # marks ocean
// - S marks the start
// - E marks the end
//
// The search tries down, right, up and left in that order.

fn main() {
    let map = Map::from_labels(
        [
            ["grass", "grass", "grass"],
            ["grass", "ocean", "grass"],
            ["grass", "grass", "grass"],
        ],
        (0, 0),
        (2, 2),
    )
    .unwrap();
    println!("{}", map);
    let path = map.find_path().unwrap();
    println!("Path: {}", path);
}
