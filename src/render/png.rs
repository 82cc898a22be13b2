use std::io::Cursor;

use image::{ImageFormat, ImageResult, Rgb, RgbImage};

use crate::maze::{Direction, Grid};

const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
const WALL: Rgb<u8> = Rgb([0, 0, 0]);
const START: Rgb<u8> = Rgb([0, 160, 0]);
const FINISH: Rgb<u8> = Rgb([200, 0, 0]);

/// Pixel sizes for [`to_image`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PngStyle {
    pub cell_size: u32,
    pub wall_width: u32,
}

impl Default for PngStyle {
    fn default() -> Self {
        Self {
            cell_size: 20,
            wall_width: 2,
        }
    }
}

fn fill(img: &mut RgbImage, x: u32, y: u32, w: u32, h: u32, color: Rgb<u8>) {
    let x_end = (x + w).min(img.width());
    let y_end = (y + h).min(img.height());
    for py in y..y_end {
        for px in x..x_end {
            img.put_pixel(px, py, color);
        }
    }
}

/// Rasterizes the maze.
///
/// A wall on a grid line at pixel offset `p` covers `p..p + wall_width`, so the image is
/// `cols * cell_size + wall_width` wide and `rows * cell_size + wall_width` high.
/// The top left cell is marked green and the bottom right one red.
pub fn to_image(grid: &Grid, style: &PngStyle) -> RgbImage {
    let size = style.cell_size.max(1);
    let wall = style.wall_width.max(1);
    let width = grid.cols() as u32 * size + wall;
    let height = grid.rows() as u32 * size + wall;
    let mut img = RgbImage::from_pixel(width, height, BACKGROUND);

    let marker = size * 3 / 10;
    let mark = |img: &mut RgbImage, row: usize, col: usize, color: Rgb<u8>| {
        let cx = col as u32 * size + wall / 2 + size / 2;
        let cy = row as u32 * size + wall / 2 + size / 2;
        fill(img, cx - marker, cy - marker, 2 * marker, 2 * marker, color);
    };
    mark(&mut img, grid.rows() - 1, grid.cols() - 1, FINISH);
    mark(&mut img, 0, 0, START);

    // Outer border
    fill(&mut img, 0, 0, width, wall, WALL);
    fill(&mut img, 0, height - wall, width, wall, WALL);
    fill(&mut img, 0, 0, wall, height, WALL);
    fill(&mut img, width - wall, 0, wall, height, WALL);

    // Walls are symmetric, so the north and west side of each cell cover every interior wall
    for cell in grid.cells() {
        let left = cell.col as u32 * size;
        let top = cell.row as u32 * size;
        if cell.row > 0 && cell.has_wall(Direction::North) {
            fill(&mut img, left, top, size + wall, wall, WALL);
        }
        if cell.col > 0 && cell.has_wall(Direction::West) {
            fill(&mut img, left, top, wall, size + wall, WALL);
        }
    }
    img
}

/// PNG-encoded bytes of [`to_image`].
pub fn to_png(grid: &Grid, style: &PngStyle) -> ImageResult<Vec<u8>> {
    let mut bytes = Cursor::new(Vec::new());
    to_image(grid, style).write_to(&mut bytes, ImageFormat::Png)?;
    Ok(bytes.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL: PngStyle = PngStyle {
        cell_size: 10,
        wall_width: 2,
    };

    #[test]
    fn test_image_size() {
        let grid = Grid::new(3, 5).unwrap();
        let img = to_image(&grid, &SMALL);
        assert_eq!(img.dimensions(), (5 * 10 + 2, 3 * 10 + 2));
    }

    #[test]
    fn test_single_cell() {
        let grid = Grid::new(1, 1).unwrap();
        let img = to_image(&grid, &SMALL);
        assert_eq!(*img.get_pixel(0, 0), WALL);
        assert_eq!(*img.get_pixel(11, 11), WALL);
        assert_eq!(*img.get_pixel(6, 6), START);
        assert_eq!(*img.get_pixel(2, 2), BACKGROUND);
    }

    #[test]
    fn test_carved_wall_is_background() {
        let mut grid = Grid::new(1, 2).unwrap();
        // Pixel on the shared wall line, clear of both markers
        assert_eq!(*to_image(&grid, &SMALL).get_pixel(10, 5), WALL);
        assert_eq!(*to_image(&grid, &SMALL).get_pixel(16, 6), FINISH);

        grid.carve((0, 0), (0, 1)).unwrap();
        let img = to_image(&grid, &SMALL);
        assert_eq!(*img.get_pixel(10, 5), BACKGROUND);
        assert_eq!(*img.get_pixel(11, 5), BACKGROUND);
        // Border walls stay
        assert_eq!(*img.get_pixel(10, 0), WALL);
    }

    #[test]
    fn test_png_signature() {
        let grid = Grid::new(2, 2).unwrap();
        let bytes = to_png(&grid, &PngStyle::default()).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }
}
