//! Spanish strings. Missing keys fall back to English.

pub(super) const ENTRIES: &[(&str, &str)] = &[
    // nav + chrome
    ("nav.home", "Inicio"),
    ("nav.about", "Nosotros"),
    ("nav.services", "Servicios"),
    ("nav.portfolio", "Portafolio"),
    ("nav.blog", "Blog"),
    ("nav.contact", "Contacto"),
    ("nav.shop", "Tienda"),
    ("nav.cart", "Carrito"),
    ("nav.login", "Iniciar sesión"),
    ("nav.register", "Crear cuenta"),
    ("nav.logout", "Cerrar sesión"),
    ("ui.menu", "Menú"),
    ("ui.sidebar", "Mostrar u ocultar barra lateral"),
    ("ui.language", "Idioma"),
    ("ui.toggle_theme", "Cambiar modo oscuro"),
    ("footer.tagline", "Fabricación metálica de precisión desde 1998."),
    // common
    ("common.all", "Todos"),
    ("common.cancel", "Cancelar"),
    ("common.confirm", "Confirmar"),
    ("common.customer", "Cliente"),
    ("common.date", "Fecha"),
    ("common.delete", "Eliminar"),
    ("common.deleted", "Eliminado."),
    ("common.details", "Detalles"),
    ("common.dismiss", "Cerrar"),
    ("common.edit", "Editar"),
    ("common.empty", "Aún no hay nada aquí."),
    ("common.hide", "Ocultar"),
    ("common.loading", "Cargando…"),
    ("common.new", "Nuevo"),
    ("common.next", "Siguiente"),
    ("common.pages", "Páginas"),
    ("common.previous", "Anterior"),
    ("common.refresh", "Actualizar"),
    ("common.remove", "Quitar"),
    ("common.retry", "Reintentar"),
    ("common.save", "Guardar"),
    ("common.saved", "Guardado."),
    ("common.search", "Buscar…"),
    ("common.status", "Estado"),
    // errors
    ("error.network", "No se pudo contactar con el servidor. Revisa tu conexión."),
    ("error.unauthorized", "Tu sesión ha caducado. Vuelve a iniciar sesión."),
    ("error.forbidden", "No tienes acceso a eso."),
    ("error.not_found", "Ese elemento ya no existe."),
    ("error.validation", "Algunos campos requieren atención."),
    ("error.server", "Algo salió mal de nuestro lado. Inténtalo de nuevo."),
    ("validation.required", "Completa todos los campos obligatorios."),
    ("validation.email", "Introduce un correo electrónico válido."),
    ("validation.phone", "Introduce un teléfono válido."),
    ("validation.password_short", "La contraseña necesita al menos 8 caracteres."),
    ("validation.password_mismatch", "Las contraseñas no coinciden."),
    ("validation.date", "Introduce la fecha como AAAA-MM-DD."),
    ("validation.time", "Introduce la hora como HH:MM."),
    ("validation.price", "Introduce un precio mayor que cero."),
    ("validation.stock", "El stock debe ser un número entero."),
    ("validation.quantity", "La cantidad debe ser un entero positivo."),
    ("validation.slug", "El slug usa minúsculas, dígitos y guiones simples."),
    ("upload.hint", "Formatos aceptados:"),
    ("upload.too_large", "Archivo demasiado grande"),
    ("upload.bad_type", "Tipo de archivo no admitido"),
    ("upload.too_many", "Demasiados archivos"),
    // forms
    ("form.name", "Nombre"),
    ("form.full_name", "Nombre completo"),
    ("form.email", "Correo electrónico"),
    ("form.phone", "Teléfono"),
    ("form.password", "Contraseña"),
    ("form.confirm_password", "Confirmar contraseña"),
    ("form.subject", "Asunto"),
    ("form.message", "Mensaje"),
    ("form.address", "Dirección"),
    ("form.city", "Ciudad"),
    ("form.postal_code", "Código postal"),
    ("form.country", "País"),
    ("form.service", "Servicio"),
    ("form.choose", "Elige…"),
    ("form.date", "Fecha"),
    ("form.time", "Hora"),
    ("form.notes", "Notas"),
    ("form.title", "Título"),
    ("form.description", "Descripción"),
    // marketing
    ("home.title", "Acero, a la medida."),
    ("home.subtitle", "Soldadura a medida, corte láser y herrería arquitectónica para hogares e industria."),
    ("home.cta_quote", "Solicitar cotización"),
    ("home.cta_shop", "Ver la tienda"),
    ("home.featured", "Lo que fabricamos"),
    ("home.all_services", "Todos los servicios"),
    ("home.why_title", "Por qué Forgeline"),
    ("home.why_precision", "Tolerancias de una décima de milímetro en cada corte."),
    ("home.why_materials", "Acero, inoxidable y aluminio certificados."),
    ("home.why_turnaround", "La mayoría de los trabajos se entregan en dos semanas."),
    ("about.title", "Nosotros"),
    ("about.subtitle", "Un taller familiar que se convirtió en una planta de fabricación completa."),
    ("about.story", "Forgeline empezó como un puesto de soldadura de dos personas y hoy opera láser, plegadora y pintura en polvo bajo un mismo techo."),
    ("about.value_quality", "Calidad"),
    ("about.value_quality_text", "Cada pieza se mide antes de salir del taller."),
    ("about.value_safety", "Seguridad"),
    ("about.value_safety_text", "Soldadores certificados y procesos auditados."),
    ("about.value_service", "Servicio"),
    ("about.value_service_text", "Un solo contacto del plano a la entrega."),
    ("about.cta", "Habla con nosotros"),
    ("services.title", "Servicios"),
    ("services.subtitle", "Desde reparaciones puntuales hasta series de producción."),
    ("services.cta", "Pedir cotización"),
    ("portfolio.title", "Portafolio"),
    ("portfolio.subtitle", "Proyectos recientes del taller."),
    ("blog.title", "Blog"),
    ("blog.subtitle", "Notas sobre materiales, métodos y proyectos."),
    ("blog.read_more", "Leer más"),
    ("blog.back", "Volver al blog"),
    ("blog.slug", "Slug"),
    ("blog.excerpt", "Resumen"),
    ("blog.body", "Contenido (markdown)"),
    ("blog.cover", "Imagen de portada"),
    ("blog.published", "Publicado"),
    ("blog.state_published", "Publicado"),
    ("blog.state_draft", "Borrador"),
    ("blog.write", "Escribir"),
    ("blog.preview", "Vista previa"),
    ("blog.confirm_delete", "¿Eliminar esta entrada?"),
    ("contact.title", "Contacto"),
    ("contact.subtitle", "Cuéntanos tu proyecto y te responderemos en un día hábil."),
    ("contact.send", "Enviar mensaje"),
    ("contact.sent", "¡Gracias! Tu mensaje está en camino."),
    ("contact.visit", "Visita el taller"),
    ("contact.hours", "Lun–Vie 7:00–17:00"),
    ("not_found.title", "Página no encontrada"),
    ("not_found.subtitle", "La página que buscas no existe."),
    ("not_found.home", "Volver al inicio"),
    // shop
    ("shop.title", "Tienda"),
    ("shop.subtitle", "Soportes, herrajes y piezas listas."),
    ("shop.search", "Buscar productos"),
    ("shop.all_categories", "Todas las categorías"),
    ("shop.no_results", "Ningún producto coincide con tus filtros."),
    ("shop.add_to_cart", "Añadir al carrito"),
    ("shop.in_stock", "Disponible"),
    ("shop.out_of_stock", "Agotado"),
    ("shop.back", "Volver a la tienda"),
    ("cart.title", "Tu carrito"),
    ("cart.empty", "Tu carrito está vacío."),
    ("cart.added", "Añadido al carrito."),
    ("cart.capped", "Cantidad limitada al stock disponible."),
    ("cart.product", "Producto"),
    ("cart.price", "Precio"),
    ("cart.quantity", "Cantidad"),
    ("cart.line_total", "Total"),
    ("cart.subtotal", "Subtotal"),
    ("cart.tax", "Impuestos"),
    ("cart.shipping", "Envío"),
    ("cart.free_shipping", "Gratis"),
    ("cart.total", "Total"),
    ("cart.clear", "Vaciar carrito"),
    ("cart.continue", "Seguir comprando"),
    ("cart.checkout", "Finalizar compra"),
    ("checkout.title", "Finalizar compra"),
    ("checkout.shipping", "Dirección de envío"),
    ("checkout.summary", "Resumen del pedido"),
    ("checkout.notes", "Notas de entrega"),
    ("checkout.payment_note", "El pago se acuerda a la entrega o por factura."),
    ("checkout.place_order", "Realizar pedido"),
    ("checkout.placed", "Pedido realizado. ¡Gracias!"),
    // auth
    ("auth.login_title", "Iniciar sesión"),
    ("auth.register_title", "Crea tu cuenta"),
    ("auth.login", "Entrar"),
    ("auth.register", "Crear cuenta"),
    ("auth.no_account", "¿Aún no tienes cuenta?"),
    ("auth.have_account", "¿Ya estás registrado?"),
    ("auth.password_hint", "Al menos 8 caracteres."),
    ("auth.welcome", "¡Bienvenido!"),
    ("auth.invalid_credentials", "Correo o contraseña incorrectos."),
    ("auth.account_disabled", "Esta cuenta ha sido desactivada."),
    ("role.customer", "Cliente"),
    ("role.employee", "Empleado"),
    ("role.admin", "Administrador"),
    // customer dashboard
    ("dash.title", "Mi cuenta"),
    ("dash.overview", "Resumen"),
    ("dash.appointments", "Citas"),
    ("dash.quotations", "Cotizaciones"),
    ("dash.orders", "Pedidos"),
    ("dash.messages", "Mensajes"),
    ("dash.welcome", "Hola de nuevo"),
    ("dash.upcoming_appointments", "Próximas citas"),
    ("dash.quotes_to_answer", "Cotizaciones por responder"),
    ("dash.open_orders", "Pedidos abiertos"),
    ("dash.book_appointment", "Reservar una cita"),
    ("dash.request_quote", "Solicitar cotización"),
    ("appointments.book_title", "Reserva una visita"),
    ("appointments.book", "Reservar"),
    ("appointments.booked", "Cita reservada."),
    ("appointments.cancelled", "Cita cancelada."),
    ("appointments.confirm_cancel", "¿Cancelar esta cita?"),
    ("appointments.none", "Aún no tienes citas."),
    ("appointment_status.pending", "Pendiente"),
    ("appointment_status.confirmed", "Confirmada"),
    ("appointment_status.completed", "Completada"),
    ("appointment_status.cancelled", "Cancelada"),
    ("quotations.request_title", "Solicitar cotización"),
    ("quotations.material", "Material"),
    ("quotations.quantity", "Cantidad"),
    ("quotations.deadline", "Fecha límite"),
    ("quotations.attachments", "Planos y documentos"),
    ("quotations.submit", "Enviar solicitud"),
    ("quotations.sent", "Solicitud enviada."),
    ("quotations.none", "Aún no hay solicitudes de cotización."),
    ("quotations.price", "Precio"),
    ("quotations.accept", "Aceptar"),
    ("quotations.reject", "Rechazar"),
    ("quotations.accepted", "Cotización aceptada."),
    ("quotations.rejected", "Cotización rechazada."),
    ("quotations.send_quote", "Enviar cotización"),
    ("quotations.quote_sent", "Cotización enviada al cliente."),
    ("quotation_status.pending", "Pendiente"),
    ("quotation_status.quoted", "Cotizada"),
    ("quotation_status.accepted", "Aceptada"),
    ("quotation_status.rejected", "Rechazada"),
    ("orders.none", "Aún no tienes pedidos."),
    ("order_status.pending", "Pendiente"),
    ("order_status.processing", "En proceso"),
    ("order_status.shipped", "Enviado"),
    ("order_status.delivered", "Entregado"),
    ("order_status.cancelled", "Cancelado"),
    ("messages.none", "Aún no hay mensajes. Pregúntanos lo que quieras."),
    ("messages.placeholder", "Escribe un mensaje…"),
    ("messages.send", "Enviar"),
    // back-office
    ("admin.title", "Administración"),
    ("admin.analytics", "Analítica"),
    ("admin.users", "Usuarios"),
    ("admin.employees", "Empleados"),
    ("admin.appointments", "Citas"),
    ("admin.quotations", "Cotizaciones"),
    ("admin.tasks", "Tareas"),
    ("admin.products", "Productos"),
    ("admin.orders", "Pedidos"),
    ("admin.blog", "Blog"),
    ("analytics.revenue", "Ingresos"),
    ("analytics.orders", "Pedidos"),
    ("analytics.customers", "Clientes"),
    ("analytics.pending_quotations", "Cotizaciones pendientes"),
    ("analytics.upcoming_appointments", "Próximas citas"),
    ("analytics.monthly_revenue", "Ingresos mensuales"),
    ("users.role", "Rol"),
    ("users.active", "Activo"),
    ("users.joined", "Alta"),
    ("users.confirm_delete", "¿Eliminar este usuario? No se puede deshacer."),
    ("employees.position", "Puesto"),
    ("employees.confirm_delete", "¿Dar de baja a este empleado?"),
    ("tasks.assignee", "Responsable"),
    ("tasks.unassigned", "Sin asignar"),
    ("tasks.due_date", "Vence"),
    ("tasks.priority", "Prioridad"),
    ("tasks.confirm_delete", "¿Eliminar esta tarea?"),
    ("task_status.todo", "Por hacer"),
    ("task_status.in_progress", "En curso"),
    ("task_status.done", "Hecha"),
    ("priority.low", "Baja"),
    ("priority.medium", "Media"),
    ("priority.high", "Alta"),
    ("products.category", "Categoría"),
    ("products.price", "Precio"),
    ("products.stock", "Stock"),
    ("products.active", "Publicado"),
    ("products.image", "Foto"),
    ("products.confirm_delete", "¿Eliminar este producto?"),
];
