use std::fmt::Write;

use crate::maze::{Direction, Grid};

/// Drawing options for [`to_svg`].
#[derive(Debug, Clone, PartialEq)]
pub struct SvgStyle {
    /// Side of a cell in pixels
    pub cell_size: f64,
    /// Stroke width of the walls in pixels
    pub wall_width: f64,
    pub wall_color: String,
    pub background_color: String,
}

impl Default for SvgStyle {
    fn default() -> Self {
        Self {
            cell_size: 20.0,
            wall_width: 2.0,
            wall_color: "black".to_string(),
            background_color: "white".to_string(),
        }
    }
}

fn line(svg: &mut String, x1: f64, y1: f64, x2: f64, y2: f64) {
    // Writing into a String cannot fail
    let _ = writeln!(svg, r#"    <line x1="{x1}" y1="{y1}" x2="{x2}" y2="{y2}"/>"#);
}

/// Renders the maze as a standalone SVG document.
///
/// The outer border is drawn as four lines; interior walls are drawn from the cell on
/// either side that owns them, so a shared wall may be emitted twice. A green circle marks
/// the top left cell and a red square the bottom right one.
pub fn to_svg(grid: &Grid, style: &SvgStyle) -> String {
    let size = style.cell_size;
    let width = grid.cols() as f64 * size;
    let height = grid.rows() as f64 * size;

    let mut svg = String::new();
    let _ = writeln!(
        svg,
        r#"<svg width="{width}" height="{height}" xmlns="http://www.w3.org/2000/svg">"#
    );
    let _ = writeln!(
        svg,
        r#"  <rect width="{width}" height="{height}" fill="{}"/>"#,
        style.background_color
    );
    let _ = writeln!(
        svg,
        r#"  <g stroke="{}" stroke-width="{}" stroke-linecap="square">"#,
        style.wall_color, style.wall_width
    );

    // Outer border
    line(&mut svg, 0.0, 0.0, width, 0.0);
    line(&mut svg, 0.0, height, width, height);
    line(&mut svg, 0.0, 0.0, 0.0, height);
    line(&mut svg, width, 0.0, width, height);

    for cell in grid.cells() {
        let left = cell.col as f64 * size;
        let right = left + size;
        let top = cell.row as f64 * size;
        let bottom = top + size;

        if cell.row > 0 && cell.has_wall(Direction::North) {
            line(&mut svg, left, top, right, top);
        }
        if cell.row + 1 < grid.rows() && cell.has_wall(Direction::South) {
            line(&mut svg, left, bottom, right, bottom);
        }
        if cell.col > 0 && cell.has_wall(Direction::West) {
            line(&mut svg, left, top, left, bottom);
        }
        if cell.col + 1 < grid.cols() && cell.has_wall(Direction::East) {
            line(&mut svg, right, top, right, bottom);
        }
    }
    svg.push_str("  </g>\n");

    let marker = size * 0.3;
    let _ = writeln!(
        svg,
        r#"  <circle cx="{}" cy="{}" r="{marker}" fill="green" opacity="0.8"/>"#,
        0.5 * size,
        0.5 * size
    );
    let _ = writeln!(
        svg,
        r#"  <rect x="{}" y="{}" width="{}" height="{}" fill="red" opacity="0.8"/>"#,
        width - 0.5 * size - marker,
        height - 0.5 * size - marker,
        2.0 * marker,
        2.0 * marker
    );
    svg.push_str("</svg>\n");
    svg
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_walled_grid_line_count() {
        // 2x2 fully walled: 4 border lines plus each interior wall seen from both sides
        let grid = Grid::new(2, 2).unwrap();
        let svg = to_svg(&grid, &SvgStyle::default());
        assert!(svg.starts_with(r#"<svg width="40" height="40""#));
        assert_eq!(svg.matches("<line").count(), 4 + 8);
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_carved_walls_are_not_drawn() {
        let mut grid = Grid::new(1, 2).unwrap();
        let walled = to_svg(&grid, &SvgStyle::default()).matches("<line").count();
        grid.carve((0, 0), (0, 1)).unwrap();
        let svg = to_svg(&grid, &SvgStyle::default());
        assert_eq!(walled, 4 + 2);
        assert_eq!(svg.matches("<line").count(), 4);
    }

    #[test]
    fn test_style_is_applied() {
        let grid = Grid::new(3, 1).unwrap();
        let style = SvgStyle {
            cell_size: 10.0,
            wall_width: 1.5,
            wall_color: "navy".to_string(),
            background_color: "ivory".to_string(),
        };
        let svg = to_svg(&grid, &style);
        assert!(svg.contains(r#"width="10" height="30""#));
        assert!(svg.contains(r#"stroke="navy" stroke-width="1.5""#));
        assert!(svg.contains(r#"fill="ivory""#));
    }
}
