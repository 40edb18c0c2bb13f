mod server;

pub use server::{DnsServer, DnsServerSettings};

use hickory_proto::op::{Message, MessageType, ResponseCode};

/// Minimal SERVFAIL reply mirroring the request: same ID, same opcode,
/// RD copied, question section copied, all other sections empty.
pub fn servfail_reply(request: &Message) -> Message {
    let mut reply = Message::new();
    reply.set_id(request.id());
    reply.set_message_type(MessageType::Response);
    reply.set_op_code(request.op_code());
    reply.set_response_code(ResponseCode::ServFail);
    reply.set_recursion_desired(request.recursion_desired());
    reply.add_queries(request.queries().iter().cloned());
    reply
}

/// RCODE names as used in metric labels and logs.
pub fn rcode_name(code: ResponseCode) -> &'static str {
    match code {
        ResponseCode::NoError => "NOERROR",
        ResponseCode::FormErr => "FORMERR",
        ResponseCode::ServFail => "SERVFAIL",
        ResponseCode::NXDomain => "NXDOMAIN",
        ResponseCode::NotImp => "NOTIMP",
        ResponseCode::Refused => "REFUSED",
        ResponseCode::NotAuth => "NOTAUTH",
        ResponseCode::NotZone => "NOTZONE",
        _ => "UNKNOWN",
    }
}
