/// Protocol class identifiers.
#[allow(unused)]
pub mod classes {
    pub const CLASS_CONNECTION: u16 = 10;
    pub const CLASS_CHANNEL: u16 = 20;
    pub const CLASS_EXCHANGE: u16 = 40;
    pub const CLASS_QUEUE: u16 = 50;
    pub const CLASS_BASIC: u16 = 60;
    pub const CLASS_CONFIRM: u16 = 85;
    pub const CLASS_TX: u16 = 90;
}

/// Reply codes carried by connection.close and channel.close.
#[allow(unused)]
pub mod replies {
    pub const REPLY_SUCCESS: u16 = 200;
    pub const CONTENT_TOO_LARGE: u16 = 311;
    pub const NO_CONSUMERS: u16 = 313;
    pub const CONNECTION_FORCED: u16 = 320;
    pub const INVALID_PATH: u16 = 402;
    pub const ACCESS_REFUSED: u16 = 403;
    pub const NOT_FOUND: u16 = 404;
    pub const RESOURCE_LOCKED: u16 = 405;
    pub const PRECONDITION_FAILED: u16 = 406;
    pub const FRAME_ERROR: u16 = 501;
    pub const SYNTAX_ERROR: u16 = 502;
    pub const COMMAND_INVALID: u16 = 503;
    pub const CHANNEL_ERROR: u16 = 504;
    pub const UNEXPECTED_FRAME: u16 = 505;
    pub const RESOURCE_ERROR: u16 = 506;
    pub const NOT_ALLOWED: u16 = 530;
    pub const NOT_IMPLEMENTED: u16 = 540;
    pub const INTERNAL_ERROR: u16 = 541;
}

/// Protocol version negotiated between client and server.
#[allow(unused)]
pub mod version {
    pub const PROTOCOL_MAJOR: u8 = 0;
    pub const PROTOCOL_MINOR: u8 = 9;
    pub const PROTOCOL_REVISION: u8 = 1;
}
