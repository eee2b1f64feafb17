/// A 2D drawing surface, as handed out by a host for a canvas element.
pub trait Surface {
    /// Set the colour used by subsequent fills.
    fn set_fill_style(&mut self, style: &str);

    /// Fill a `width × height` rectangle whose top-left corner is `(x, y)`.
    fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32);
}
