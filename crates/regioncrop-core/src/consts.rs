/// Maximum number of files sent in a single upload request.
pub const MAX_UPLOAD_FILES: usize = 4;

/// Multipart field name used for every uploaded file.
pub const UPLOAD_FIELD: &str = "files";

/// Default server address (Flask development server).
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";

/// Source width used when dimensions are not looked up per file.
pub const DEFAULT_SOURCE_WIDTH: u32 = 2736;

/// Source height used when dimensions are not looked up per file.
pub const DEFAULT_SOURCE_HEIGHT: u32 = 3584;

/// Overlay stroke color (light green), RGB.
pub const OVERLAY_STROKE_RGB: [u8; 3] = [144, 238, 144];

/// Extension of uploaded studies on the server.
pub const SOURCE_EXTENSION: &str = "dcm";

/// Extension of the thumbnails the server derives from each upload.
pub const THUMBNAIL_EXTENSION: &str = "jpg";

/// Route serving uploaded files and thumbnails.
pub const UPLOADS_ROUTE: &str = "uploads/";
