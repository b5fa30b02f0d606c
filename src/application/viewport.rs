/// Viewport maps the drawing area onto board cells.
/// The board is fixed-size: it is sized once from the area at startup.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub cell_size: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32, cell_size: f32) -> Self {
        Self { width, height, cell_size }
    }

    /// Board (columns, rows) that fit in the area.
    /// Zero when the area is smaller than a cell.
    pub fn board_dimensions(&self) -> (usize, usize) {
        let columns = (self.width / self.cell_size).floor().max(0.0) as usize;
        let rows = (self.height / self.cell_size).floor().max(0.0) as usize;
        (columns, rows)
    }

    /// Convert a pointer position to a cell, `None` when it is off the board
    pub fn pixel_to_cell(&self, px: f32, py: f32, board: (usize, usize)) -> Option<(usize, usize)> {
        if px < 0.0 || py < 0.0 {
            return None;
        }
        let x = (px / self.cell_size).floor() as usize;
        let y = (py / self.cell_size).floor() as usize;
        (x < board.0 && y < board.1).then_some((x, y))
    }

    /// Top-left pixel of a cell
    pub fn cell_to_pixel(&self, x: usize, y: usize) -> (f32, f32) {
        (x as f32 * self.cell_size, y as f32 * self.cell_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_dimensions_floor() {
        let viewport = Viewport::new(1010.0, 599.0, 20.0);
        assert_eq!(viewport.board_dimensions(), (50, 29));

        let tiny = Viewport::new(10.0, 10.0, 20.0);
        assert_eq!(tiny.board_dimensions(), (0, 0));
    }

    #[test]
    fn test_pixel_to_cell() {
        let viewport = Viewport::new(200.0, 100.0, 20.0);
        let board = viewport.board_dimensions();

        assert_eq!(viewport.pixel_to_cell(0.0, 0.0, board), Some((0, 0)));
        assert_eq!(viewport.pixel_to_cell(39.9, 20.0, board), Some((1, 1)));
        assert_eq!(viewport.pixel_to_cell(199.0, 99.0, board), Some((9, 4)));
        assert_eq!(viewport.pixel_to_cell(200.0, 50.0, board), None);
        assert_eq!(viewport.pixel_to_cell(-1.0, 50.0, board), None);
    }

    #[test]
    fn test_cell_to_pixel() {
        let viewport = Viewport::new(200.0, 100.0, 20.0);
        assert_eq!(viewport.cell_to_pixel(3, 2), (60.0, 40.0));
    }
}
