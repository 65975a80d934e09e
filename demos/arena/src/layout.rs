//! The built-in arena: a 27 × 20 board with four power pills, a lair in
//! the middle, and a wrap-around tunnel on row 9.

pub const ARENA: &str = "\
###########################
#o...........#...........o#
#.####.#####.#.#####.####.#
#.........................#
#.####.#.#########.#.####.#
#......#.....#.....#......#
######.#####.#.#####.######
######.#...........#.######
######.#.####G####.#.######
       ...#######...       
######.#...........#.######
######.#.#########.#.######
#............#............#
#.####.#####.#.#####.####.#
#o..#........P........#..o#
###.#.#.#########.#.#.#.###
#.....#......#......#.....#
#.##########.#.##########.#
#.........................#
###########################
";
